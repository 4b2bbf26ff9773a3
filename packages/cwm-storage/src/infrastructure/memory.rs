//! In-memory model store
//!
//! Process-local; contents are lost on drop.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use cwm_model::ModelGraph;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{ModelSnapshot, ModelStore};
use crate::{Result, StorageError};

#[derive(Debug, Default)]
struct State {
    /// Snapshot id -> (snapshot, JSON document)
    snapshots: BTreeMap<String, (ModelSnapshot, String)>,
    /// Highest version ever assigned per model
    versions: HashMap<String, u32>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryModelStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.read().snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ModelStore for InMemoryModelStore {
    async fn save_model(
        &self,
        model: &str,
        graph: &ModelGraph,
        metadata: serde_json::Value,
    ) -> Result<ModelSnapshot> {
        let mut state = self.state.write();
        let version = state.versions.get(model).copied().unwrap_or(0) + 1;
        let (snapshot, content) = ModelSnapshot::capture(model, version, graph, metadata)?;

        state.versions.insert(model.to_string(), version);
        state
            .snapshots
            .insert(snapshot.id.clone(), (snapshot.clone(), content));
        debug!(snapshot = %snapshot.id, elements = snapshot.element_count, "saved model");
        Ok(snapshot)
    }

    async fn load_model(&self, snapshot_id: &str) -> Result<ModelGraph> {
        let state = self.state.read();
        let (snapshot, content) = state
            .snapshots
            .get(snapshot_id)
            .ok_or_else(|| StorageError::snapshot_not_found(snapshot_id))?;
        snapshot.restore(content)
    }

    async fn get_snapshot(&self, snapshot_id: &str) -> Result<ModelSnapshot> {
        self.state
            .read()
            .snapshots
            .get(snapshot_id)
            .map(|(snapshot, _)| snapshot.clone())
            .ok_or_else(|| StorageError::snapshot_not_found(snapshot_id))
    }

    async fn list_snapshots(
        &self,
        model: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ModelSnapshot>> {
        let state = self.state.read();
        let mut snapshots: Vec<ModelSnapshot> = state
            .snapshots
            .values()
            .filter(|(s, _)| s.model == model)
            .map(|(s, _)| s.clone())
            .collect();
        snapshots.sort_by(|a, b| b.version.cmp(&a.version));
        if let Some(limit) = limit {
            snapshots.truncate(limit);
        }
        Ok(snapshots)
    }

    async fn delete_snapshot(&self, snapshot_id: &str) -> Result<()> {
        match self.state.write().snapshots.remove(snapshot_id) {
            Some(_) => {
                debug!(snapshot = snapshot_id, "deleted snapshot");
                Ok(())
            }
            None => Err(StorageError::snapshot_not_found(snapshot_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use cwm_model::packages::{CorePackage, StandardCorePackage};

    fn sample(classes: usize) -> ModelGraph {
        let mut g = ModelGraph::new();
        for i in 0..classes {
            StandardCorePackage
                .create_class(&mut g, &format!("C{}", i))
                .unwrap();
        }
        g
    }

    #[tokio::test]
    async fn test_versions_increase() {
        let store = InMemoryModelStore::new();
        let v1 = store.save_model("m", &sample(1), serde_json::Value::Null).await.unwrap();
        let v2 = store.save_model("m", &sample(2), serde_json::Value::Null).await.unwrap();
        let other = store.save_model("n", &sample(1), serde_json::Value::Null).await.unwrap();

        assert_eq!((v1.version, v2.version, other.version), (1, 2, 1));
        assert_eq!(store.len(), 3);
        let listed = store.list_snapshots("m", None).await.unwrap();
        assert_eq!(listed, vec![v2.clone(), v1]);
        assert_eq!(store.latest_snapshot("m").await.unwrap(), Some(v2));
        assert_eq!(store.latest_snapshot("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_deleted_versions_are_not_reused() {
        let store = InMemoryModelStore::new();
        store.save_model("m", &sample(1), serde_json::Value::Null).await.unwrap();
        let v2 = store.save_model("m", &sample(1), serde_json::Value::Null).await.unwrap();
        store.delete_snapshot(&v2.id).await.unwrap();

        let v3 = store.save_model("m", &sample(1), serde_json::Value::Null).await.unwrap();
        assert_eq!(v3.id, "m@v3");
        let err = store.get_snapshot(&v2.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::SnapshotNotFound);
        assert!(store.delete_snapshot(&v2.id).await.is_err());
    }

    #[tokio::test]
    async fn test_tampered_content_is_rejected() {
        let store = InMemoryModelStore::new();
        let snapshot = store.save_model("m", &sample(2), serde_json::Value::Null).await.unwrap();
        assert_eq!(store.load_model(&snapshot.id).await.unwrap().len(), 2);

        if let Some((_, content)) = store.state.write().snapshots.get_mut(&snapshot.id) {
            *content = content.replace("C1", "D1");
        }
        let err = store.load_model(&snapshot.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Integrity);
    }
}
