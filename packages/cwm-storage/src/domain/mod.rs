//! Domain layer for model snapshots
//!
//! # Core Principles
//!
//! 1. **Immutable snapshots**: every `save_model` produces a new version
//! 2. **Snapshot identity**: `{model}@v{version}`, never reused
//! 3. **Verified loads**: content is checked against its sha256 hash and the
//!    decoded graph is integrity-checked before it is returned
//!
//! # Examples
//!
//! ```rust,ignore
//! use cwm_storage::{InMemoryModelStore, ModelStore};
//!
//! async fn example(store: impl ModelStore, graph: &ModelGraph) -> Result<()> {
//!     let snapshot = store.save_model("warehouse", graph, serde_json::Value::Null).await?;
//!     let restored = store.load_model(&snapshot.id).await?;
//!     assert_eq!(restored.len(), graph.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cwm_model::ModelGraph;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::{Result, StorageError};

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// Metadata of one stored model version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    /// `{model}@v{version}`
    pub id: String,
    /// Model name
    pub model: String,
    /// 1-based, increasing per model
    pub version: u32,
    pub timestamp: DateTime<Utc>,
    /// sha256 of the stored JSON document, lowercase hex
    pub content_hash: String,
    pub element_count: usize,
    /// Optional metadata (author, source system, etc.)
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl ModelSnapshot {
    pub fn snapshot_id(model: &str, version: u32) -> String {
        format!("{}@v{}", model, version)
    }

    /// Serialize `graph` and describe it as version `version` of `model`
    ///
    /// Returns the snapshot and the JSON document it hashes.
    pub fn capture(
        model: &str,
        version: u32,
        graph: &ModelGraph,
        metadata: serde_json::Value,
    ) -> Result<(Self, String)> {
        let content = graph.to_json()?;
        let snapshot = Self {
            id: Self::snapshot_id(model, version),
            model: model.to_string(),
            version,
            timestamp: Utc::now(),
            content_hash: content_hash(&content),
            element_count: graph.len(),
            metadata,
        };
        Ok((snapshot, content))
    }

    /// Decode a stored document after checking it against this snapshot
    pub fn restore(&self, content: &str) -> Result<ModelGraph> {
        let actual = content_hash(content);
        if actual != self.content_hash {
            warn!(
                snapshot = %self.id,
                expected = %self.content_hash,
                actual = %actual,
                "stored model does not match its content hash"
            );
            return Err(StorageError::integrity(format!(
                "content hash mismatch for snapshot {}",
                self.id
            )));
        }
        Ok(ModelGraph::from_json(content)?)
    }
}

/// sha256 of `content`, lowercase hex
pub fn content_hash(content: &str) -> String {
    format!("{:x}", Sha256::digest(content.as_bytes()))
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait: ModelStore
// ═══════════════════════════════════════════════════════════════════════════

/// Versioned model storage abstraction
///
/// # Implementations
///
/// - `InMemoryModelStore`: process-local, for tests and tools
/// - `SqliteModelStore`: file-backed (feature `sqlite`)
#[async_trait]
pub trait ModelStore: Send + Sync {
    /// Store `graph` as the next version of `model`
    async fn save_model(
        &self,
        model: &str,
        graph: &ModelGraph,
        metadata: serde_json::Value,
    ) -> Result<ModelSnapshot>;

    /// Load and verify a stored model
    ///
    /// # Errors
    ///
    /// - `SnapshotNotFound` if the snapshot doesn't exist
    /// - `Integrity` if the content no longer matches its hash
    /// - `Model` if the document is not a consistent graph
    async fn load_model(&self, snapshot_id: &str) -> Result<ModelGraph>;

    async fn get_snapshot(&self, snapshot_id: &str) -> Result<ModelSnapshot>;

    /// Snapshots of `model`, newest first
    async fn list_snapshots(&self, model: &str, limit: Option<usize>)
        -> Result<Vec<ModelSnapshot>>;

    async fn latest_snapshot(&self, model: &str) -> Result<Option<ModelSnapshot>> {
        Ok(self.list_snapshots(model, Some(1)).await?.into_iter().next())
    }

    /// Remove one version; later saves never reuse its id
    async fn delete_snapshot(&self, snapshot_id: &str) -> Result<()>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
