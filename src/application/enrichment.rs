//! Enrichment Stage
//!
//! Merges each token candidate with its best trading pair. Lookups run
//! sequentially in fixed-size batches with a pause between batches to spread
//! load on the pair endpoint. Every candidate is preserved in the output:
//! a failed or skipped lookup records `pair_data` as absent, never an error.

use std::time::Duration;

use crate::domain::pair::select_best_pair;
use crate::domain::token::{EnrichedToken, TokenCandidate};
use crate::ports::TokenFeed;

/// Batching parameters, injected from the application config
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Pair lookups per batch
    pub batch_size: usize,
    /// Pause between batches
    pub batch_pause: Duration,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            batch_size: 5,
            batch_pause: Duration::from_secs(1),
        }
    }
}

/// Enrich candidates with live pair data.
///
/// Output length always equals input length. Candidates without a chain id
/// or address skip the network call entirely.
pub async fn enrich<F: TokenFeed + ?Sized>(
    feed: &F,
    candidates: Vec<TokenCandidate>,
    config: &EnrichmentConfig,
) -> Vec<EnrichedToken> {
    if candidates.is_empty() {
        return Vec::new();
    }

    tracing::info!("Enriching {} tokens with pair data...", candidates.len());
    let batch_size = config.batch_size.max(1);
    let mut enriched = Vec::with_capacity(candidates.len());

    for (i, candidate) in candidates.into_iter().enumerate() {
        if i > 0 && i % batch_size == 0 {
            tokio::time::sleep(config.batch_pause).await;
        }

        if !candidate.has_lookup_key() {
            enriched.push(EnrichedToken {
                token: candidate,
                pair_data: None,
            });
            continue;
        }

        let pairs = feed
            .token_pairs(&candidate.chain_id, &candidate.token_address)
            .await;
        let best = select_best_pair(pairs);

        match &best {
            Some(pair) => tracing::info!(
                "  {} - ${}",
                if pair.symbol.is_empty() {
                    short_address(&candidate.token_address)
                } else {
                    pair.symbol.clone()
                },
                pair.price_usd.as_deref().unwrap_or("?")
            ),
            None => tracing::warn!(
                "  No pair data for {}...",
                short_address(&candidate.token_address)
            ),
        }

        enriched.push(EnrichedToken {
            token: candidate,
            pair_data: best,
        });
    }

    enriched
}

fn short_address(address: &str) -> String {
    address.chars().take(12).collect()
}
