//! Trading Pairs
//!
//! The most-liquid trading pair retained for a token candidate, with the
//! per-window price/volume/transaction stats DexScreener reports, and the
//! selection rule that picks the representative pair.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Percentage price change per time window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m5: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h6: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h24: Option<f64>,
}

/// Traded volume in USD per time window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeWindows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m5: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h6: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h24: Option<f64>,
}

/// Pool liquidity breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Liquidity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<f64>,
}

/// Buy/sell transaction counts for one window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxnCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buys: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sells: Option<u64>,
}

/// Transaction counts per time window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxnWindows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m5: Option<TxnCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1: Option<TxnCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h6: Option<TxnCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h24: Option<TxnCounts>,
}

/// The representative trading pair for a token candidate.
///
/// `price_usd` stays a string; that is how the upstream sends it, and the
/// snapshot preserves it verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradingPair {
    /// Base token name
    pub name: String,
    /// Base token symbol
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<String>,
    pub price_change: PriceChange,
    pub volume: VolumeWindows,
    pub liquidity: Liquidity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fdv: Option<f64>,
    /// DEX identifier (e.g., "raydium", "uniswap")
    pub dex_id: String,
    /// Pool / pair contract address
    pub pair_address: String,
    /// Pair creation time (Unix milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_created_at: Option<i64>,
    /// DexScreener pair page URL
    pub url: String,
    pub txns: TxnWindows,
}

impl TradingPair {
    /// 24h volume used for ranking; missing volume counts as zero
    pub fn volume_h24(&self) -> f64 {
        self.volume.h24.unwrap_or(0.0)
    }
}

/// Pick the representative pair: highest 24h volume wins.
///
/// The sort is stable, so on equal volume the first-encountered pair is kept.
/// Re-running on the same input always yields the same choice.
pub fn select_best_pair(mut pairs: Vec<TradingPair>) -> Option<TradingPair> {
    if pairs.is_empty() {
        return None;
    }
    pairs.sort_by(|a, b| {
        b.volume_h24()
            .partial_cmp(&a.volume_h24())
            .unwrap_or(Ordering::Equal)
    });
    pairs.into_iter().next()
}
