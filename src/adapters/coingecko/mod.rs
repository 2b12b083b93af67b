//! CoinGecko Adapter
//!
//! Trending search results and meme-token category market data from the
//! CoinGecko public API.

mod client;
mod types;

pub use client::CoinGeckoClient;
pub use types::{RawMarketCoin, RawTrendingResponse};
