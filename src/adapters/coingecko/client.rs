//! CoinGecko Client
//!
//! Trending search and meme-category market listings. Both operations
//! degrade to an empty collection on fetch failure.

use async_trait::async_trait;

use crate::adapters::http::{coerce_list, FetchError, FetcherConfig, JsonFetcher};
use crate::config::Config;
use crate::domain::coin::{MemeMarketCoin, TrendingCoin};
use crate::ports::CoinFeed;

use super::types::{RawMarketCoin, RawTrendingResponse};

/// Client for the CoinGecko public API (v3)
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    fetcher: JsonFetcher,
    base_url: String,
    meme_page_size: u32,
}

impl CoinGeckoClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Self::with_fetcher(
            JsonFetcher::new(FetcherConfig::from(&config.fetcher))?,
            config,
        )
    }

    pub fn with_fetcher(fetcher: JsonFetcher, config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher,
            base_url: config.sources.coingecko_url.trim_end_matches('/').to_string(),
            meme_page_size: config.limits.meme_page_size,
        })
    }
}

#[async_trait]
impl CoinFeed for CoinGeckoClient {
    async fn trending(&self) -> Vec<TrendingCoin> {
        tracing::info!("Fetching CoinGecko trending...");

        let url = format!("{}/search/trending", self.base_url);
        let Some(value) = self.fetcher.fetch_json(&url).await else {
            tracing::warn!("CoinGecko trending unavailable, continuing with empty list");
            return Vec::new();
        };

        let parsed: RawTrendingResponse = serde_json::from_value(value).unwrap_or_default();
        tracing::info!("  {} trending coins", parsed.coins.len());
        parsed
            .coins
            .into_iter()
            .map(|entry| entry.item.into_coin())
            .collect()
    }

    async fn meme_markets(&self) -> Vec<MemeMarketCoin> {
        tracing::info!("Fetching CoinGecko meme category coins...");

        let url = format!(
            "{}/coins/markets?vs_currency=usd&category=meme-token&order=market_cap_desc\
             &per_page={}&page=1&sparkline=false&price_change_percentage=1h,24h,7d",
            self.base_url, self.meme_page_size
        );
        let Some(value) = self.fetcher.fetch_json(&url).await else {
            tracing::warn!("CoinGecko meme markets unavailable, continuing with empty list");
            return Vec::new();
        };

        let coins: Vec<MemeMarketCoin> = coerce_list(value)
            .into_iter()
            .filter_map(|item| serde_json::from_value::<RawMarketCoin>(item).ok())
            .map(RawMarketCoin::into_coin)
            .collect();
        tracing::info!("  {} meme coins by market cap", coins.len());
        coins
    }
}
