//! Memescope - Meme Coin Sector Snapshot Collector Library
//!
//! Harvests meme-coin market metadata across Solana, Ethereum and Base from
//! the DexScreener and CoinGecko public APIs, and persists dated JSON
//! snapshots plus a rolling "latest" file.
//!
//! # Modules
//!
//! - `domain`: Normalized records (candidates, pairs, coins, snapshot) and pure pipeline logic
//! - `ports`: Trait abstractions over the upstream feeds (TokenFeed, CoinFeed)
//! - `adapters`: External implementations (HTTP fetcher, DexScreener, CoinGecko, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Enrichment stage and the snapshot collector

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
