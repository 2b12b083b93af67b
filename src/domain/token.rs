//! Token Candidates
//!
//! Normalized token records discovered via the DexScreener boost and profile
//! feeds, plus the pure candidate-list operations the collector applies
//! before paying any enrichment cost: target-chain filtering and
//! first-seen-order deduplication.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::pair::TradingPair;

/// A token discovered on a boost or profile feed.
///
/// Identity key is `(chain_id, token_address)`. All string fields default to
/// empty when the upstream entry lacks them; `amount`/`total_amount` are only
/// sent by the boost feeds and stay absent for profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCandidate {
    /// Chain identifier (e.g., "solana", "ethereum", "base")
    #[serde(default)]
    pub chain_id: String,
    /// Token contract / mint address
    #[serde(default)]
    pub token_address: String,
    /// DexScreener token page URL
    #[serde(default)]
    pub url: String,
    /// Token icon URL
    #[serde(default)]
    pub icon: String,
    /// Token banner image URL
    #[serde(default)]
    pub header: String,
    /// Free-form token description
    #[serde(default)]
    pub description: String,
    /// Boost amount of the current boost (boost feeds only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Cumulative boost amount (boost feeds only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
}

impl TokenCandidate {
    /// Identity key used for deduplication
    pub fn key(&self) -> (&str, &str) {
        (self.chain_id.as_str(), self.token_address.as_str())
    }

    /// Whether the candidate carries enough identity for a pair lookup
    pub fn has_lookup_key(&self) -> bool {
        !self.chain_id.is_empty() && !self.token_address.is_empty()
    }
}

/// A candidate merged with its best trading pair.
///
/// `pair_data` is `None` when the lookup failed or the candidate lacked a
/// chain/address. That is a recognized partial-data state, serialized as an explicit
/// `null` so consumers always see the key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedToken {
    #[serde(flatten)]
    pub token: TokenCandidate,
    #[serde(default)]
    pub pair_data: Option<TradingPair>,
}

/// Drop candidates outside the target chain set.
pub fn retain_target_chains(
    candidates: Vec<TokenCandidate>,
    chains: &HashSet<String>,
) -> Vec<TokenCandidate> {
    candidates
        .into_iter()
        .filter(|c| chains.contains(c.chain_id.as_str()))
        .collect()
}

/// Deduplicate by `(chain_id, token_address)`, preserving first-seen order.
pub fn dedup_candidates(candidates: Vec<TokenCandidate>) -> Vec<TokenCandidate> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert((c.chain_id.clone(), c.token_address.clone())))
        .collect()
}
