//! Local filesystem storage implementation.
//!
//! ## Storage Layout
//!
//! ```text
//! {root}/
//! ├── config.toml           # Labeler Configuration
//! ├── interactions.json     # Raw snapshot from the platform
//! ├── labeled.json          # Labeled output for downstream consumers
//! └── stats.json            # Counters from the last label run
//! ```
//!
//! All writes go through a temp-file-then-rename so a crashed run never
//! leaves a half-written snapshot behind.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{Interaction, LabelStats};
use crate::storage::{InteractionStorage, LabeledData, RawSnapshot, WriteMetadata};

/// File name of the raw snapshot.
pub const RAW_FILE: &str = "interactions.json";

/// File name of the labeled output.
pub const LABELED_FILE: &str = "labeled.json";

/// File name of the label-run statistics.
pub const STATS_FILE: &str = "stats.json";

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path).await?;

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Write JSON data.
    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(key, &bytes).await
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl InteractionStorage for LocalStorage {
    async fn write_raw(&self, interactions: Vec<Interaction>) -> Result<WriteMetadata> {
        let snapshot = RawSnapshot::new(interactions);
        self.write_json(RAW_FILE, &snapshot).await?;
        log::info!("Raw snapshot: {} interactions written to {}", snapshot.count, RAW_FILE);

        Ok(WriteMetadata {
            record_count: snapshot.count,
            timestamp: snapshot.fetched_at,
        })
    }

    async fn load_raw(&self) -> Result<Option<RawSnapshot>> {
        self.read_json(RAW_FILE).await
    }

    async fn write_labeled(
        &self,
        interactions: Vec<Interaction>,
        stats: &LabelStats,
    ) -> Result<WriteMetadata> {
        let data = LabeledData::new(interactions);
        self.write_json(LABELED_FILE, &data).await?;
        log::info!("Labeled data: {} interactions written to {}", data.count, LABELED_FILE);

        self.write_json(STATS_FILE, stats).await?;

        Ok(WriteMetadata {
            record_count: data.count,
            timestamp: Utc::now(),
        })
    }

    async fn load_labeled(&self) -> Result<Option<LabeledData>> {
        self.read_json(LABELED_FILE).await
    }
}
