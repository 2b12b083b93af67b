//! HTTP Fetch Adapter
//!
//! The single retry-with-backoff implementation shared by every upstream
//! client. One GET, JSON body, bounded timeout; transport failures, non-2xx
//! statuses, and malformed bodies are retried with a linearly increasing
//! delay, and exhausting the attempts yields `None`; the fetcher never
//! propagates an error past its own boundary.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Identifying client tag sent on every request
pub const USER_AGENT: &str = "MemeCoinsBot/1.0";

/// Errors absorbed inside the fetcher's retry loop
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),
}

/// Fetcher tuning, injected from the application config
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Per-call timeout
    pub timeout: Duration,
    /// Maximum attempts per call
    pub max_retries: u32,
    /// Base backoff delay; attempt k waits k times this
    pub retry_base_delay: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            max_retries: 3,
            retry_base_delay: Duration::from_secs(2),
        }
    }
}

/// JSON-over-GET client with bounded linear-backoff retry
#[derive(Debug, Clone)]
pub struct JsonFetcher {
    config: FetcherConfig,
    http: Client,
}

impl JsonFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { config, http })
    }

    /// Fetch and parse one URL.
    ///
    /// Returns `None` after exhausting the configured attempts; callers treat
    /// absence as "no data available for this call" and degrade.
    pub async fn fetch_json(&self, url: &str) -> Option<Value> {
        let attempts = self.config.max_retries.max(1);
        for attempt in 1..=attempts {
            match self.try_fetch(url).await {
                Ok(value) => return Some(value),
                Err(e) => {
                    tracing::warn!(
                        "[attempt {}/{}] Error fetching {}: {}",
                        attempt,
                        attempts,
                        url,
                        e
                    );
                    if attempt < attempts {
                        tokio::time::sleep(self.config.retry_base_delay * attempt).await;
                    }
                }
            }
        }
        None
    }

    async fn try_fetch(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Normalize the documented scalar-or-list upstream shape.
///
/// The list endpoints are allowed to return either a JSON array or a single
/// object; a scalar becomes a single-element list, `null` becomes empty.
pub fn coerce_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}
