//! Application Layer - Pipeline Orchestration
//!
//! The one-shot collection pipeline: enrichment stage and the snapshot
//! collector that sequences the source adapters.

pub mod collector;
pub mod enrichment;

pub use collector::{SnapshotCollector, SOURCES};
pub use enrichment::{enrich, EnrichmentConfig};
