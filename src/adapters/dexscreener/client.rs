//! DexScreener Client
//!
//! Token discovery (boost and profile feeds) and per-token pair lookup.
//! Every operation degrades to an empty collection on fetch failure; the
//! chain filter runs here so off-chain tokens never reach enrichment.

use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::Value;

use crate::adapters::http::{coerce_list, FetchError, FetcherConfig, JsonFetcher};
use crate::config::Config;
use crate::domain::pair::TradingPair;
use crate::domain::token::{retain_target_chains, TokenCandidate};
use crate::ports::TokenFeed;

use super::types::{RawPair, RawTokenRecord};

/// Client for the DexScreener public API
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    fetcher: JsonFetcher,
    base_url: String,
    target_chains: HashSet<String>,
    profile_limit: usize,
}

impl DexScreenerClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Self::with_fetcher(
            JsonFetcher::new(FetcherConfig::from(&config.fetcher))?,
            config,
        )
    }

    pub fn with_fetcher(fetcher: JsonFetcher, config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher,
            base_url: config.sources.dexscreener_url.trim_end_matches('/').to_string(),
            target_chains: config.chains.target_set(),
            profile_limit: config.limits.latest_profiles,
        })
    }

    /// Fetch one list endpoint, normalize and chain-filter its entries.
    async fn token_list(&self, path: &str, label: &str) -> Vec<TokenCandidate> {
        tracing::info!("Fetching DexScreener {}...", label);

        let url = format!("{}{}", self.base_url, path);
        let Some(value) = self.fetcher.fetch_json(&url).await else {
            tracing::warn!("DexScreener {} unavailable, continuing with empty list", label);
            return Vec::new();
        };

        let raw = coerce_list(value);
        let total = raw.len();
        let candidates: Vec<TokenCandidate> = raw
            .into_iter()
            .filter_map(|item| serde_json::from_value::<RawTokenRecord>(item).ok())
            .map(RawTokenRecord::into_candidate)
            .collect();

        let filtered = retain_target_chains(candidates, &self.target_chains);
        tracing::info!(
            "  {} tokens on target chains (of {} total)",
            filtered.len(),
            total
        );
        filtered
    }
}

#[async_trait]
impl TokenFeed for DexScreenerClient {
    async fn top_boosts(&self) -> Vec<TokenCandidate> {
        self.token_list("/token-boosts/top/v1", "top boosts").await
    }

    async fn latest_boosts(&self) -> Vec<TokenCandidate> {
        self.token_list("/token-boosts/latest/v1", "latest boosts")
            .await
    }

    async fn latest_profiles(&self) -> Vec<TokenCandidate> {
        let mut profiles = self
            .token_list("/token-profiles/latest/v1", "latest profiles")
            .await;
        profiles.truncate(self.profile_limit);
        profiles
    }

    async fn token_pairs(&self, chain_id: &str, token_address: &str) -> Vec<TradingPair> {
        let url = format!("{}/tokens/v1/{}/{}", self.base_url, chain_id, token_address);
        let Some(value) = self.fetcher.fetch_json(&url).await else {
            return Vec::new();
        };

        // The endpoint answers with either a bare list of pairs or an
        // object carrying a "pairs" field.
        let raw = match value {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("pairs") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        raw.into_iter()
            .filter_map(|item| serde_json::from_value::<RawPair>(item).ok())
            .map(RawPair::into_pair)
            .collect()
    }
}
