//! Collector Integration Tests
//!
//! End-to-end tests for the collection pipeline using hand-rolled feed
//! fakes: chain-filter and truncation invariants, total-outage degradation,
//! dedup ordering, archive overwrite, and snapshot round-trips.
//!
//! All tests are deterministic (no real network calls) and run with zero
//! pauses.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use tempfile::tempdir;

use memescope::application::SnapshotCollector;
use memescope::config::Config;
use memescope::domain::pair::{TradingPair, VolumeWindows};
use memescope::domain::{CollectionSnapshot, MemeMarketCoin, TokenCandidate, TrendingCoin};
use memescope::ports::{CoinFeed, TokenFeed};

// ============================================================================
// Test Fixtures
// ============================================================================

fn candidate(chain: &str, addr: &str) -> TokenCandidate {
    TokenCandidate {
        chain_id: chain.to_string(),
        token_address: addr.to_string(),
        url: format!("https://dexscreener.com/{chain}/{addr}"),
        ..Default::default()
    }
}

fn pair_for(addr: &str, volume: f64) -> TradingPair {
    TradingPair {
        name: format!("{addr} token"),
        symbol: addr.to_uppercase(),
        price_usd: Some("0.001".to_string()),
        pair_address: format!("pool-{addr}"),
        volume: VolumeWindows {
            h24: Some(volume),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Config with zero pauses writing into a temp directory
fn test_config(data_dir: PathBuf) -> Config {
    let mut config = Config::default();
    config.enrichment.batch_pause_ms = 0;
    config.pipeline.stage_pause_ms = 0;
    config.output.data_dir = data_dir;
    config
}

/// Static token feed returning fixed candidate lists and a pair table
#[derive(Default)]
struct StaticTokenFeed {
    top: Vec<TokenCandidate>,
    latest: Vec<TokenCandidate>,
    profiles: Vec<TokenCandidate>,
    pairs: HashMap<String, Vec<TradingPair>>,
}

#[async_trait]
impl TokenFeed for StaticTokenFeed {
    async fn top_boosts(&self) -> Vec<TokenCandidate> {
        self.top.clone()
    }

    async fn latest_boosts(&self) -> Vec<TokenCandidate> {
        self.latest.clone()
    }

    async fn latest_profiles(&self) -> Vec<TokenCandidate> {
        self.profiles.clone()
    }

    async fn token_pairs(&self, _chain_id: &str, token_address: &str) -> Vec<TradingPair> {
        self.pairs.get(token_address).cloned().unwrap_or_default()
    }
}

/// Static coin feed returning fixed trending/market lists
#[derive(Default)]
struct StaticCoinFeed {
    trending: Vec<TrendingCoin>,
    markets: Vec<MemeMarketCoin>,
}

#[async_trait]
impl CoinFeed for StaticCoinFeed {
    async fn trending(&self) -> Vec<TrendingCoin> {
        self.trending.clone()
    }

    async fn meme_markets(&self) -> Vec<MemeMarketCoin> {
        self.markets.clone()
    }
}

/// Feeds simulating total upstream outage: every source is empty
#[derive(Default)]
struct OutageTokenFeed;

#[async_trait]
impl TokenFeed for OutageTokenFeed {
    async fn top_boosts(&self) -> Vec<TokenCandidate> {
        Vec::new()
    }

    async fn latest_boosts(&self) -> Vec<TokenCandidate> {
        Vec::new()
    }

    async fn latest_profiles(&self) -> Vec<TokenCandidate> {
        Vec::new()
    }

    async fn token_pairs(&self, _chain_id: &str, _token_address: &str) -> Vec<TradingPair> {
        Vec::new()
    }
}

#[derive(Default)]
struct OutageCoinFeed;

#[async_trait]
impl CoinFeed for OutageCoinFeed {
    async fn trending(&self) -> Vec<TrendingCoin> {
        Vec::new()
    }

    async fn meme_markets(&self) -> Vec<MemeMarketCoin> {
        Vec::new()
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn top_boosts_respect_chain_filter_and_limit() {
    // 20 unique tokens across the three target chains plus 5 on an unlisted
    // chain. The snapshot must keep at most 15, none off-chain, each with a
    // pairData key present in the serialized output.
    let chains = ["solana", "ethereum", "base"];
    let mut top = Vec::new();
    let mut pairs = HashMap::new();
    for i in 0..20 {
        let addr = format!("tok{i}");
        top.push(candidate(chains[i % 3], &addr));
        if i % 2 == 0 {
            pairs.insert(addr.clone(), vec![pair_for(&addr, 1000.0 + i as f64)]);
        }
    }
    for i in 0..5 {
        top.push(candidate("bsc", &format!("off{i}")));
    }

    let dir = tempdir().unwrap();
    let collector = SnapshotCollector::new(
        test_config(dir.path().to_path_buf()),
        StaticTokenFeed {
            top,
            pairs,
            ..Default::default()
        },
        StaticCoinFeed::default(),
    );

    let snapshot = collector.run().await.unwrap();

    assert_eq!(snapshot.top_boosts.len(), 15);
    assert!(snapshot
        .top_boosts
        .iter()
        .all(|t| chains.contains(&t.token.chain_id.as_str())));

    // Every serialized entry carries the pairData key, object or null
    let raw = fs::read_to_string(dir.path().join("latest.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    for entry in value["topBoosts"].as_array().unwrap() {
        let obj = entry.as_object().unwrap();
        assert!(obj.contains_key("pairData"));
        assert!(obj["pairData"].is_object() || obj["pairData"].is_null());
    }
}

#[tokio::test]
async fn latest_boosts_deduplicate_preserving_first_seen_order() {
    let latest = vec![
        candidate("solana", "a"),
        candidate("ethereum", "b"),
        candidate("solana", "a"),
        candidate("base", "c"),
        candidate("ethereum", "b"),
    ];

    let dir = tempdir().unwrap();
    let collector = SnapshotCollector::new(
        test_config(dir.path().to_path_buf()),
        StaticTokenFeed {
            latest,
            ..Default::default()
        },
        StaticCoinFeed::default(),
    );

    let snapshot = collector.run().await.unwrap();
    let addresses: Vec<&str> = snapshot
        .latest_boosts
        .iter()
        .map(|t| t.token.token_address.as_str())
        .collect();
    assert_eq!(addresses, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn latest_boosts_truncate_to_ten() {
    let latest: Vec<TokenCandidate> = (0..25)
        .map(|i| candidate("solana", &format!("tok{i}")))
        .collect();

    let dir = tempdir().unwrap();
    let collector = SnapshotCollector::new(
        test_config(dir.path().to_path_buf()),
        StaticTokenFeed {
            latest,
            ..Default::default()
        },
        StaticCoinFeed::default(),
    );

    let snapshot = collector.run().await.unwrap();
    assert_eq!(snapshot.latest_boosts.len(), 10);
}

#[tokio::test]
async fn enrichment_keeps_candidate_without_address() {
    let top = vec![candidate("solana", "a"), candidate("solana", "")];
    let mut pairs = HashMap::new();
    pairs.insert("a".to_string(), vec![pair_for("a", 500.0)]);

    let dir = tempdir().unwrap();
    let collector = SnapshotCollector::new(
        test_config(dir.path().to_path_buf()),
        StaticTokenFeed {
            top,
            pairs,
            ..Default::default()
        },
        StaticCoinFeed::default(),
    );

    let snapshot = collector.run().await.unwrap();
    assert_eq!(snapshot.top_boosts.len(), 2);
    assert!(snapshot.top_boosts[0].pair_data.is_some());
    assert!(snapshot.top_boosts[1].pair_data.is_none());
}

#[tokio::test]
async fn total_outage_still_writes_both_slots() {
    let dir = tempdir().unwrap();
    let collector = SnapshotCollector::new(
        test_config(dir.path().to_path_buf()),
        OutageTokenFeed,
        OutageCoinFeed,
    );

    let snapshot = collector.run().await.unwrap();

    assert!(!snapshot.meta.timestamp.is_empty());
    assert!(snapshot.top_boosts.is_empty());
    assert!(snapshot.latest_boosts.is_empty());
    assert!(snapshot.latest_profiles.is_empty());
    assert!(snapshot.trending.is_empty());
    assert!(snapshot.meme_coins.is_empty());

    let latest = dir.path().join("latest.json");
    let archive = dir.path().join(snapshot.archive_file());
    assert!(latest.exists());
    assert!(archive.exists());

    // Both parse back with all five collections present as empty sequences
    for path in [latest, archive] {
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        for key in [
            "topBoosts",
            "latestBoosts",
            "latestProfiles",
            "trending",
            "memeCoins",
        ] {
            assert_eq!(value[key].as_array().unwrap().len(), 0);
        }
        assert!(!value["meta"]["timestamp"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn second_run_same_date_replaces_archive() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path().to_path_buf());

    let first = SnapshotCollector::new(config.clone(), OutageTokenFeed, OutageCoinFeed)
        .run()
        .await
        .unwrap();

    let trending = vec![TrendingCoin {
        id: "dogwifcoin".to_string(),
        symbol: "WIF".to_string(),
        ..Default::default()
    }];
    let second = SnapshotCollector::new(
        config,
        OutageTokenFeed,
        StaticCoinFeed {
            trending,
            ..Default::default()
        },
    )
    .run()
    .await
    .unwrap();

    assert_eq!(first.meta.date, second.meta.date);

    // One archive for the date, carrying the second run's content
    let archived: CollectionSnapshot = serde_json::from_str(
        &fs::read_to_string(dir.path().join(second.archive_file())).unwrap(),
    )
    .unwrap();
    assert_eq!(archived.trending.len(), 1);
    assert_eq!(archived.trending[0].id, "dogwifcoin");
}

#[tokio::test]
async fn snapshot_round_trip_preserves_fields_and_order() {
    let top: Vec<TokenCandidate> = (0..4)
        .map(|i| candidate("solana", &format!("tok{i}")))
        .collect();
    let mut pairs = HashMap::new();
    pairs.insert("tok1".to_string(), vec![pair_for("tok1", 42.0)]);

    let markets = vec![
        MemeMarketCoin {
            id: "pepe".to_string(),
            symbol: "PEPE".to_string(),
            current_price: Some(0.00001),
            ..Default::default()
        },
        MemeMarketCoin {
            id: "shiba-inu".to_string(),
            symbol: "SHIB".to_string(),
            ..Default::default()
        },
    ];

    let dir = tempdir().unwrap();
    let collector = SnapshotCollector::new(
        test_config(dir.path().to_path_buf()),
        StaticTokenFeed {
            top,
            pairs,
            ..Default::default()
        },
        StaticCoinFeed {
            markets,
            ..Default::default()
        },
    );

    let snapshot = collector.run().await.unwrap();

    let serialized = serde_json::to_string_pretty(&snapshot).unwrap();
    let reparsed: CollectionSnapshot = serde_json::from_str(&serialized).unwrap();

    // Identical field presence and sequence ordering after a round trip
    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        serde_json::to_value(&reparsed).unwrap()
    );
    assert_eq!(reparsed.top_boosts.len(), 4);
    assert_eq!(reparsed.top_boosts[1].token.token_address, "tok1");
    assert!(reparsed.top_boosts[1].pair_data.is_some());
    assert_eq!(reparsed.meme_coins[0].id, "pepe");
    assert_eq!(reparsed.meme_coins[1].id, "shiba-inu");

    // On-disk document equals the in-memory one
    let on_disk: CollectionSnapshot = serde_json::from_str(
        &fs::read_to_string(dir.path().join("latest.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        serde_json::to_value(&on_disk).unwrap(),
        serde_json::to_value(&snapshot).unwrap()
    );
}

#[tokio::test]
async fn profiles_and_trending_pass_through_unmodified() {
    let profiles: Vec<TokenCandidate> = (0..3)
        .map(|i| candidate("base", &format!("profile{i}")))
        .collect();
    let trending = vec![
        TrendingCoin {
            id: "bonk".to_string(),
            ..Default::default()
        },
        TrendingCoin {
            id: "dogwifcoin".to_string(),
            ..Default::default()
        },
    ];

    let dir = tempdir().unwrap();
    let collector = SnapshotCollector::new(
        test_config(dir.path().to_path_buf()),
        StaticTokenFeed {
            profiles,
            ..Default::default()
        },
        StaticCoinFeed {
            trending,
            ..Default::default()
        },
    );

    let snapshot = collector.run().await.unwrap();
    assert_eq!(snapshot.latest_profiles.len(), 3);
    assert_eq!(snapshot.trending.len(), 2);
    assert_eq!(snapshot.trending[0].id, "bonk");
    assert_eq!(snapshot.trending[1].id, "dogwifcoin");
}
