//! Collection Snapshots
//!
//! The root output document of one pipeline run and its persistence: a
//! rolling `latest.json` slot plus a date-keyed archive slot, both
//! overwritten fresh each run. A second run on the same calendar date
//! replaces the prior archive rather than versioning it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::coin::{MemeMarketCoin, TrendingCoin};
use crate::domain::token::{EnrichedToken, TokenCandidate};

/// Rolling snapshot file name, always overwritten
pub const LATEST_FILE: &str = "latest.json";

/// Snapshots are stamped in KST (UTC+9), the timezone the downstream
/// dashboards operate in.
const KST_OFFSET_SECS: i32 = 9 * 3600;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialization(String),

    #[error("Failed to create data directory: {0}")]
    Directory(String),

    #[error("Failed to write snapshot file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read snapshot file: {0}")]
    Read(String),

    #[error("Snapshot file is corrupted: {0}")]
    Corrupted(String),
}

/// Run metadata captured once at run start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMeta {
    /// Run timestamp, `YYYY-MM-DD HH:MM:SS KST`
    pub timestamp: String,
    /// KST calendar date keying the archive slot
    pub date: String,
    /// Target chain set the run filtered to
    pub chains: Vec<String>,
    /// Upstream source names
    pub sources: Vec<String>,
}

impl SnapshotMeta {
    /// Capture the current KST time along with the run configuration.
    pub fn capture(chains: Vec<String>, sources: Vec<String>) -> Self {
        let kst = FixedOffset::east_opt(KST_OFFSET_SECS).expect("KST offset is in range");
        let now = Utc::now().with_timezone(&kst);
        Self {
            timestamp: now.format("%Y-%m-%d %H:%M:%S KST").to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            chains,
            sources,
        }
    }
}

/// The complete output document of one collection run.
///
/// Built additively by the collector, immutable after assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSnapshot {
    pub meta: SnapshotMeta,
    pub top_boosts: Vec<EnrichedToken>,
    pub latest_boosts: Vec<EnrichedToken>,
    pub latest_profiles: Vec<TokenCandidate>,
    pub trending: Vec<TrendingCoin>,
    pub meme_coins: Vec<MemeMarketCoin>,
}

impl CollectionSnapshot {
    /// Create an empty snapshot carrying only run metadata.
    pub fn new(meta: SnapshotMeta) -> Self {
        Self {
            meta,
            top_boosts: Vec::new(),
            latest_boosts: Vec::new(),
            latest_profiles: Vec::new(),
            trending: Vec::new(),
            meme_coins: Vec::new(),
        }
    }

    /// Archive file name for this snapshot's date
    pub fn archive_file(&self) -> String {
        format!("{}.json", self.meta.date)
    }

    /// Write the snapshot to both destinations under `data_dir`.
    ///
    /// Pretty-printed JSON; non-ASCII characters are written as-is. Returns
    /// the two written paths (rolling slot first). This is the only fatal
    /// failure point of a run, since the snapshot is the run's sole deliverable.
    pub fn save(&self, data_dir: &Path) -> Result<(PathBuf, PathBuf), SnapshotError> {
        fs::create_dir_all(data_dir).map_err(|e| SnapshotError::Directory(e.to_string()))?;

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;

        let latest = data_dir.join(LATEST_FILE);
        fs::write(&latest, &content).map_err(|source| SnapshotError::Write {
            path: latest.clone(),
            source,
        })?;
        tracing::info!("Saved: {}", latest.display());

        let archive = data_dir.join(self.archive_file());
        fs::write(&archive, &content).map_err(|source| SnapshotError::Write {
            path: archive.clone(),
            source,
        })?;
        tracing::info!("Saved: {}", archive.display());

        Ok((latest, archive))
    }

    /// Load the rolling snapshot, if one has been written.
    pub fn load_latest(data_dir: &Path) -> Result<Option<Self>, SnapshotError> {
        let path = data_dir.join(LATEST_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| SnapshotError::Read(e.to_string()))?;
        let snapshot: Self = serde_json::from_str(&content)
            .map_err(|e| SnapshotError::Corrupted(e.to_string()))?;
        Ok(Some(snapshot))
    }
}
