//! Configuration Loader
//!
//! The immutable configuration passed into the pipeline: target chains, API
//! bases, fetcher/enrichment tuning, collection limits and output layout.
//! `Default` carries the fixed production constants; a TOML file may override
//! any section. Tests inject fake endpoints and zero pauses through the same
//! struct.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::http::FetcherConfig;
use crate::application::enrichment::EnrichmentConfig;

/// Main configuration structure matching config/default.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chains: ChainsSection,
    pub sources: SourcesSection,
    pub fetcher: FetcherSection,
    pub enrichment: EnrichmentSection,
    pub limits: LimitsSection,
    pub pipeline: PipelineSection,
    pub output: OutputSection,
}

/// Target chain allow-list
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainsSection {
    /// Chains whose tokens are retained; others are dropped before enrichment
    pub targets: Vec<String>,
}

impl Default for ChainsSection {
    fn default() -> Self {
        Self {
            targets: vec![
                "solana".to_string(),
                "ethereum".to_string(),
                "base".to_string(),
            ],
        }
    }
}

impl ChainsSection {
    /// Target chains as a lookup set
    pub fn target_set(&self) -> HashSet<String> {
        self.targets.iter().cloned().collect()
    }
}

/// Upstream API base URLs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesSection {
    pub dexscreener_url: String,
    pub coingecko_url: String,
}

impl Default for SourcesSection {
    fn default() -> Self {
        Self {
            dexscreener_url: "https://api.dexscreener.com".to_string(),
            coingecko_url: "https://api.coingecko.com/api/v3".to_string(),
        }
    }
}

/// HTTP fetcher tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherSection {
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// Maximum attempts per call
    pub max_retries: u32,
    /// Base backoff delay in milliseconds; attempt k waits k times this
    pub retry_base_delay_ms: u64,
}

impl Default for FetcherSection {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            max_retries: 3,
            retry_base_delay_ms: 2000,
        }
    }
}

/// Enrichment batching
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnrichmentSection {
    /// Pair lookups per batch
    pub batch_size: usize,
    /// Pause between batches in milliseconds
    pub batch_pause_ms: u64,
}

impl Default for EnrichmentSection {
    fn default() -> Self {
        Self {
            batch_size: 5,
            batch_pause_ms: 1000,
        }
    }
}

/// Collection size bounds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsSection {
    /// Top-boost candidates enriched per run
    pub top_boosts: usize,
    /// Latest-boost candidates enriched per run
    pub latest_boosts: usize,
    /// Profiles kept after chain filtering
    pub latest_profiles: usize,
    /// Meme-category page size requested from CoinGecko
    pub meme_page_size: u32,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            top_boosts: 15,
            latest_boosts: 10,
            latest_profiles: 20,
            meme_page_size: 30,
        }
    }
}

/// Stage sequencing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineSection {
    /// Pause between adapter stages in milliseconds
    pub stage_pause_ms: u64,
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            stage_pause_ms: 1000,
        }
    }
}

/// Output layout
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Directory receiving latest.json and the dated archives
    pub data_dir: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file, or fall back to the built-in
/// defaults when the file does not exist.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        tracing::info!(
            "No config file at {}, using built-in defaults",
            path.as_ref().display()
        );
        let config = Config::default();
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chains.targets.is_empty() {
            return Err(ConfigError::ValidationError(
                "chains.targets cannot be empty".to_string(),
            ));
        }
        if self.chains.targets.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "chains.targets cannot contain blank entries".to_string(),
            ));
        }

        if self.sources.dexscreener_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "dexscreener_url cannot be empty".to_string(),
            ));
        }
        if self.sources.coingecko_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "coingecko_url cannot be empty".to_string(),
            ));
        }

        if self.fetcher.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(format!(
                "fetcher.timeout_secs must be > 0, got {}",
                self.fetcher.timeout_secs
            )));
        }
        if self.fetcher.max_retries == 0 {
            return Err(ConfigError::ValidationError(format!(
                "fetcher.max_retries must be > 0, got {}",
                self.fetcher.max_retries
            )));
        }

        if self.enrichment.batch_size == 0 {
            return Err(ConfigError::ValidationError(format!(
                "enrichment.batch_size must be > 0, got {}",
                self.enrichment.batch_size
            )));
        }

        if self.limits.top_boosts == 0 || self.limits.latest_boosts == 0 {
            return Err(ConfigError::ValidationError(
                "limits.top_boosts and limits.latest_boosts must be > 0".to_string(),
            ));
        }
        if self.limits.latest_profiles == 0 {
            return Err(ConfigError::ValidationError(
                "limits.latest_profiles must be > 0".to_string(),
            ));
        }
        if self.limits.meme_page_size == 0 {
            return Err(ConfigError::ValidationError(
                "limits.meme_page_size must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Pause inserted between adapter stages
    pub fn stage_pause(&self) -> Duration {
        Duration::from_millis(self.pipeline.stage_pause_ms)
    }
}

impl From<&FetcherSection> for FetcherConfig {
    fn from(section: &FetcherSection) -> Self {
        Self {
            timeout: Duration::from_secs(section.timeout_secs),
            max_retries: section.max_retries,
            retry_base_delay: Duration::from_millis(section.retry_base_delay_ms),
        }
    }
}

impl From<&EnrichmentSection> for EnrichmentConfig {
    fn from(section: &EnrichmentSection) -> Self {
        Self {
            batch_size: section.batch_size,
            batch_pause: Duration::from_millis(section.batch_pause_ms),
        }
    }
}
