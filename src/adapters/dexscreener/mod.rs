//! DexScreener Adapter
//!
//! Boost/profile token discovery and per-token trading-pair lookup against
//! the DexScreener public API.

mod client;
mod types;

pub use client::DexScreenerClient;
pub use types::{RawPair, RawTokenRecord};
