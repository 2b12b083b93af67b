//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits plus the CLI:
//! - HTTP: shared JSON fetcher with bounded retry
//! - DexScreener: boost/profile discovery and pair lookup
//! - CoinGecko: trending and meme-category market data
//! - CLI: command-line interface handlers

pub mod cli;
pub mod coingecko;
pub mod dexscreener;
pub mod http;

pub use cli::CliApp;
pub use coingecko::CoinGeckoClient;
pub use dexscreener::DexScreenerClient;
pub use http::{JsonFetcher, FetcherConfig};
