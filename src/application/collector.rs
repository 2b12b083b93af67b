//! Snapshot Collector
//!
//! The pipeline orchestrator: sequences the source adapters with throttling
//! pauses, prepares candidate lists (chain filter, first-seen dedup,
//! truncation), invokes enrichment, assembles the snapshot and persists it
//! to both output slots. Every stage is failure-isolated: a run always
//! completes and always writes a snapshot; only the filesystem write can
//! fail the run.

use std::collections::HashSet;

use crate::config::Config;
use crate::domain::snapshot::{CollectionSnapshot, SnapshotError, SnapshotMeta};
use crate::domain::token::{dedup_candidates, retain_target_chains, TokenCandidate};
use crate::ports::{CoinFeed, TokenFeed};

use super::enrichment::{enrich, EnrichmentConfig};

/// Upstream source names recorded in snapshot metadata
pub const SOURCES: [&str; 2] = ["DexScreener", "CoinGecko"];

/// One-shot collection pipeline over injected feeds
pub struct SnapshotCollector<T, C> {
    config: Config,
    token_feed: T,
    coin_feed: C,
}

impl<T: TokenFeed, C: CoinFeed> SnapshotCollector<T, C> {
    pub fn new(config: Config, token_feed: T, coin_feed: C) -> Self {
        Self {
            config,
            token_feed,
            coin_feed,
        }
    }

    /// Run the full pipeline once and persist the snapshot.
    pub async fn run(&self) -> Result<CollectionSnapshot, SnapshotError> {
        let meta = SnapshotMeta::capture(
            self.config.chains.targets.clone(),
            SOURCES.iter().map(|s| s.to_string()).collect(),
        );

        tracing::info!("Meme coin sector collection starting");
        tracing::info!("  {}", meta.timestamp);
        tracing::info!("  chains: {}", meta.chains.join(", "));

        let mut snapshot = CollectionSnapshot::new(meta);
        let chains = self.config.chains.target_set();
        let enrichment = EnrichmentConfig::from(&self.config.enrichment);

        // 1. Top boosted tokens
        let top = self.token_feed.top_boosts().await;
        let top = prepare_candidates(top, &chains, self.config.limits.top_boosts);
        snapshot.top_boosts = enrich(&self.token_feed, top, &enrichment).await;
        self.stage_pause().await;

        // 2. Latest boosted tokens
        let latest = self.token_feed.latest_boosts().await;
        let latest = prepare_candidates(latest, &chains, self.config.limits.latest_boosts);
        snapshot.latest_boosts = enrich(&self.token_feed, latest, &enrichment).await;
        self.stage_pause().await;

        // 3. Latest token profiles (truncated adapter-side)
        snapshot.latest_profiles = self.token_feed.latest_profiles().await;
        self.stage_pause().await;

        // 4. Trending coins
        snapshot.trending = self.coin_feed.trending().await;
        self.stage_pause().await;

        // 5. Meme category market coins
        snapshot.meme_coins = self.coin_feed.meme_markets().await;

        snapshot.save(&self.config.output.data_dir)?;

        tracing::info!("Collection summary:");
        tracing::info!("  top boosts:      {}", snapshot.top_boosts.len());
        tracing::info!("  latest boosts:   {}", snapshot.latest_boosts.len());
        tracing::info!("  latest profiles: {}", snapshot.latest_profiles.len());
        tracing::info!("  trending:        {}", snapshot.trending.len());
        tracing::info!("  meme coins:      {}", snapshot.meme_coins.len());

        Ok(snapshot)
    }

    async fn stage_pause(&self) {
        tokio::time::sleep(self.config.stage_pause()).await;
    }
}

/// Candidate preparation before enrichment: enforce the target-chain
/// invariant, dedup by `(chain, address)` keeping first-seen order, truncate.
///
/// The adapter already filters its own feed; re-applying the filter here
/// keeps the snapshot invariant independent of the feed implementation.
fn prepare_candidates(
    candidates: Vec<TokenCandidate>,
    chains: &HashSet<String>,
    limit: usize,
) -> Vec<TokenCandidate> {
    let mut prepared = dedup_candidates(retain_target_chains(candidates, chains));
    prepared.truncate(limit);
    prepared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(chain: &str, addr: &str) -> TokenCandidate {
        TokenCandidate {
            chain_id: chain.to_string(),
            token_address: addr.to_string(),
            ..Default::default()
        }
    }

    fn chains() -> HashSet<String> {
        ["solana", "ethereum", "base"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_prepare_filters_dedups_truncates() {
        let mut input = Vec::new();
        for i in 0..20 {
            input.push(candidate("solana", &format!("tok{i}")));
        }
        // Duplicates and off-chain entries must not count against the limit
        input.push(candidate("solana", "tok0"));
        input.push(candidate("bsc", "other"));

        let prepared = prepare_candidates(input, &chains(), 15);
        assert_eq!(prepared.len(), 15);
        assert!(prepared.iter().all(|c| c.chain_id == "solana"));
        assert_eq!(prepared[0].token_address, "tok0");
        assert_eq!(prepared[14].token_address, "tok14");
    }

    #[test]
    fn test_prepare_under_limit_keeps_all() {
        let input = vec![candidate("base", "a"), candidate("ethereum", "b")];
        let prepared = prepare_candidates(input, &chains(), 15);
        assert_eq!(prepared.len(), 2);
    }

    #[test]
    fn test_prepare_truncates_after_dedup() {
        // Three unique keys interleaved with duplicates; limit of 2 must keep
        // the first two unique keys in first-seen order.
        let input = vec![
            candidate("solana", "a"),
            candidate("solana", "a"),
            candidate("solana", "b"),
            candidate("solana", "c"),
        ];

        let prepared = prepare_candidates(input, &chains(), 2);
        assert_eq!(prepared.len(), 2);
        assert_eq!(prepared[0].token_address, "a");
        assert_eq!(prepared[1].token_address, "b");
    }
}
