//! SQLite model store
//!
//! One row per snapshot holding the JSON document; a second table keeps the
//! highest version ever assigned per model so deleted ids are not reused.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use cwm_model::ModelGraph;
use parking_lot::Mutex;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::domain::{ModelSnapshot, ModelStore};
use crate::{Result, StorageError};

const SNAPSHOT_COLUMNS: &str =
    "snapshot_id, model, version, created_at, content_hash, element_count, metadata";

/// SQLite-based ModelStore implementation
#[derive(Clone)]
pub struct SqliteModelStore {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for SqliteModelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteModelStore").finish_non_exhaustive()
    }
}

impl SqliteModelStore {
    /// Open (or create) a store at the given path
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        Self::with_connection(Connection::open(db_path)?)
    }

    /// Create an in-memory SQLite store (for testing)
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock();

        conn.execute(
            "CREATE TABLE IF NOT EXISTS model_versions (
                model TEXT PRIMARY KEY,
                last_version INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS snapshots (
                snapshot_id TEXT PRIMARY KEY,
                model TEXT NOT NULL,
                version INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                content_hash TEXT NOT NULL,
                element_count INTEGER NOT NULL,
                metadata TEXT NOT NULL,
                content TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_snapshots_model
             ON snapshots(model, version)",
            [],
        )?;

        Ok(())
    }
}

fn snapshot_from_row(row: &Row<'_>) -> rusqlite::Result<ModelSnapshot> {
    let metadata: String = row.get(6)?;
    let metadata = serde_json::from_str(&metadata)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;
    let element_count: i64 = row.get(5)?;
    Ok(ModelSnapshot {
        id: row.get(0)?,
        model: row.get(1)?,
        version: row.get(2)?,
        timestamp: row.get(3)?,
        content_hash: row.get(4)?,
        element_count: element_count as usize,
        metadata,
    })
}

#[async_trait]
impl ModelStore for SqliteModelStore {
    async fn save_model(
        &self,
        model: &str,
        graph: &ModelGraph,
        metadata: serde_json::Value,
    ) -> Result<ModelSnapshot> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        let last: Option<u32> = tx
            .query_row(
                "SELECT last_version FROM model_versions WHERE model = ?1",
                params![model],
                |row| row.get(0),
            )
            .optional()?;
        let version = last.unwrap_or(0) + 1;
        let (snapshot, content) = ModelSnapshot::capture(model, version, graph, metadata)?;

        tx.execute(
            "INSERT OR REPLACE INTO model_versions (model, last_version) VALUES (?1, ?2)",
            params![model, version],
        )?;
        tx.execute(
            "INSERT INTO snapshots
             (snapshot_id, model, version, created_at, content_hash, element_count, metadata, content)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                &snapshot.id,
                &snapshot.model,
                snapshot.version,
                snapshot.timestamp,
                &snapshot.content_hash,
                snapshot.element_count as i64,
                serde_json::to_string(&snapshot.metadata)?,
                &content,
            ],
        )?;
        tx.commit()?;

        debug!(snapshot = %snapshot.id, elements = snapshot.element_count, "saved model");
        Ok(snapshot)
    }

    async fn load_model(&self, snapshot_id: &str) -> Result<ModelGraph> {
        let loaded = {
            let conn = self.conn.lock();
            conn.query_row(
                &format!(
                    "SELECT {}, content FROM snapshots WHERE snapshot_id = ?1",
                    SNAPSHOT_COLUMNS
                ),
                params![snapshot_id],
                |row| Ok((snapshot_from_row(row)?, row.get::<_, String>(7)?)),
            )
            .optional()?
        };
        let (snapshot, content) =
            loaded.ok_or_else(|| StorageError::snapshot_not_found(snapshot_id))?;
        snapshot.restore(&content)
    }

    async fn get_snapshot(&self, snapshot_id: &str) -> Result<ModelSnapshot> {
        let conn = self.conn.lock();
        conn.query_row(
            &format!("SELECT {} FROM snapshots WHERE snapshot_id = ?1", SNAPSHOT_COLUMNS),
            params![snapshot_id],
            snapshot_from_row,
        )
        .optional()?
        .ok_or_else(|| StorageError::snapshot_not_found(snapshot_id))
    }

    async fn list_snapshots(
        &self,
        model: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ModelSnapshot>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM snapshots WHERE model = ?1 ORDER BY version DESC LIMIT ?2",
            SNAPSHOT_COLUMNS
        ))?;
        // LIMIT -1 means no limit in SQLite
        let limit = limit.map_or(-1, |l| l as i64);
        let snapshots = stmt
            .query_map(params![model, limit], snapshot_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(snapshots)
    }

    async fn delete_snapshot(&self, snapshot_id: &str) -> Result<()> {
        let conn = self.conn.lock();
        let removed = conn.execute(
            "DELETE FROM snapshots WHERE snapshot_id = ?1",
            params![snapshot_id],
        )?;
        if removed == 0 {
            return Err(StorageError::snapshot_not_found(snapshot_id));
        }
        debug!(snapshot = snapshot_id, "deleted snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use cwm_model::packages::{CorePackage, StandardCorePackage};

    fn sample() -> ModelGraph {
        let mut g = ModelGraph::new();
        let core = StandardCorePackage;
        let package = core.create_package(&mut g, "sales").unwrap();
        let class = core.create_class(&mut g, "Order").unwrap();
        g.add_owned_element(package, class).unwrap();
        g
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = SqliteModelStore::in_memory().unwrap();
        let metadata = serde_json::json!({ "author": "etl" });
        let snapshot = store.save_model("sales", &sample(), metadata.clone()).await.unwrap();

        assert_eq!(snapshot.id, "sales@v1");
        let fetched = store.get_snapshot(&snapshot.id).await.unwrap();
        assert_eq!(fetched, snapshot);
        assert_eq!(fetched.metadata, metadata);

        let graph = store.load_model(&snapshot.id).await.unwrap();
        assert_eq!(graph.to_json().unwrap(), sample().to_json().unwrap());
    }

    #[tokio::test]
    async fn test_list_with_limit() {
        let store = SqliteModelStore::in_memory().unwrap();
        for _ in 0..3 {
            store.save_model("sales", &sample(), serde_json::Value::Null).await.unwrap();
        }
        let versions: Vec<u32> = store
            .list_snapshots("sales", Some(2))
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.version)
            .collect();
        assert_eq!(versions, vec![3, 2]);
        assert_eq!(store.list_snapshots("sales", None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_corrupt_metadata_is_an_error() {
        let store = SqliteModelStore::in_memory().unwrap();
        let snapshot = store
            .save_model("sales", &sample(), serde_json::Value::Null)
            .await
            .unwrap();
        store
            .conn
            .lock()
            .execute(
                "UPDATE snapshots SET metadata = '{not json' WHERE snapshot_id = ?1",
                params![&snapshot.id],
            )
            .unwrap();

        let err = store.get_snapshot(&snapshot.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(store.list_snapshots("sales", None).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_snapshot() {
        let store = SqliteModelStore::in_memory().unwrap();
        let err = store.load_model("sales@v9").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::SnapshotNotFound);
        let err = store.delete_snapshot("sales@v9").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::SnapshotNotFound);
    }
}
