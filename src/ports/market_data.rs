//! Market Data Ports
//!
//! The upstream feeds the pipeline consumes. Implementations absorb their own
//! transport failures and degrade to empty collections: a fetch that fails
//! after retries is "no data available", never an error, so the traits carry
//! no error type.

use async_trait::async_trait;

use crate::domain::coin::{MemeMarketCoin, TrendingCoin};
use crate::domain::pair::TradingPair;
use crate::domain::token::TokenCandidate;

/// Token discovery and pair lookup (DexScreener side)
#[async_trait]
pub trait TokenFeed: Send + Sync {
    /// Most-boosted tokens, normalized and chain-filtered
    async fn top_boosts(&self) -> Vec<TokenCandidate>;

    /// Most recently boosted tokens, normalized and chain-filtered
    async fn latest_boosts(&self) -> Vec<TokenCandidate>;

    /// Latest token profiles, chain-filtered and truncated adapter-side
    async fn latest_profiles(&self) -> Vec<TokenCandidate>;

    /// All trading pairs for one token; empty when the lookup fails
    async fn token_pairs(&self, chain_id: &str, token_address: &str) -> Vec<TradingPair>;
}

/// Aggregate market data (CoinGecko side)
#[async_trait]
pub trait CoinFeed: Send + Sync {
    /// 24h trending search results
    async fn trending(&self) -> Vec<TrendingCoin>;

    /// Meme-token category, ranked by market cap
    async fn meme_markets(&self) -> Vec<MemeMarketCoin>;
}
