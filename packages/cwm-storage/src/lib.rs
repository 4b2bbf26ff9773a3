//! ModelStore - versioned snapshots of CWM models
//!
//! ## Core Principles
//!
//! 1. **Immutable versions**: saving a model never overwrites an earlier one
//! 2. **Snapshot identity**: `{model}@v{version}`
//! 3. **Verified loads**: sha256 content hash plus graph integrity check
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cwm_storage::{ModelStore, SqliteModelStore};
//!
//! let store = SqliteModelStore::open("models.db")?;
//! let snapshot = store.save_model("warehouse", &graph, serde_json::json!({"source": "erp"})).await?;
//!
//! let latest = store.latest_snapshot("warehouse").await?;
//! let restored = store.load_model(&snapshot.id).await?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use domain::{content_hash, ModelSnapshot, ModelStore};
pub use infrastructure::InMemoryModelStore;

#[cfg(feature = "sqlite")]
pub use infrastructure::SqliteModelStore;
