//! Storage abstractions for interaction persistence.
//!
//! Two files make up a run:
//! - `interactions.json` — raw snapshot as fetched from the platform
//! - `labeled.json` — the same records with `tech_support` attached
//!
//! plus `stats.json` with counters for the last label run.

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Interaction, LabelStats};

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Number of records written
    pub record_count: usize,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Envelope for the raw snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSnapshot {
    /// ISO 8601 timestamp of the fetch
    pub fetched_at: DateTime<Utc>,
    /// Total record count
    pub count: usize,
    /// The interaction records
    pub interactions: Vec<Interaction>,
}

impl RawSnapshot {
    pub fn new(interactions: Vec<Interaction>) -> Self {
        Self {
            fetched_at: Utc::now(),
            count: interactions.len(),
            interactions,
        }
    }
}

/// Envelope for the labeled output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledData {
    /// ISO 8601 timestamp of the label run
    pub updated_at: DateTime<Utc>,
    /// Total record count
    pub count: usize,
    /// The labeled interaction records
    pub interactions: Vec<Interaction>,
}

impl LabeledData {
    pub fn new(interactions: Vec<Interaction>) -> Self {
        Self {
            updated_at: Utc::now(),
            count: interactions.len(),
            interactions,
        }
    }
}

/// Trait for interaction storage backends.
#[async_trait]
pub trait InteractionStorage: Send + Sync {
    /// Write the raw snapshot, replacing any previous one.
    async fn write_raw(&self, interactions: Vec<Interaction>) -> Result<WriteMetadata>;

    /// Load the raw snapshot, or None if no fetch has run yet.
    async fn load_raw(&self) -> Result<Option<RawSnapshot>>;

    /// Write the labeled output and the stats for the run.
    async fn write_labeled(
        &self,
        interactions: Vec<Interaction>,
        stats: &LabelStats,
    ) -> Result<WriteMetadata>;

    /// Load the labeled output, or None if no label run has happened.
    async fn load_labeled(&self) -> Result<Option<LabeledData>>;
}
