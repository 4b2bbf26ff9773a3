//! ModelStore integration tests
//!
//! The same workflow runs against every adapter.

use cwm_model::packages::{RelationalPackage, StandardRelationalPackage};
use cwm_model::{ModelGraph, ModelValidator};
use cwm_storage::{ErrorKind, InMemoryModelStore, ModelStore};
use pretty_assertions::assert_eq;

fn warehouse(tables: usize) -> ModelGraph {
    let rel = StandardRelationalPackage;
    let mut g = ModelGraph::new();
    let catalog = rel.create_catalog(&mut g, "dw").unwrap();
    let schema = rel.create_schema(&mut g, "sales").unwrap();
    g.add_owned_element(catalog, schema).unwrap();
    for t in 0..tables {
        let table = rel.create_table(&mut g, &format!("t{}", t)).unwrap();
        g.add_owned_element(schema, table).unwrap();
        let column = rel.create_column(&mut g, "id").unwrap();
        g.add_feature(table, column).unwrap();
    }
    g
}

async fn exercise(store: &dyn ModelStore) {
    let first = store
        .save_model("dw", &warehouse(1), serde_json::json!({ "run": 1 }))
        .await
        .unwrap();
    let second = store
        .save_model("dw", &warehouse(3), serde_json::json!({ "run": 2 }))
        .await
        .unwrap();
    assert_eq!(first.id, "dw@v1");
    assert_eq!(second.id, "dw@v2");
    assert_ne!(first.content_hash, second.content_hash);
    assert_eq!(second.element_count, 8);

    let latest = store.latest_snapshot("dw").await.unwrap().unwrap();
    assert_eq!(latest.id, second.id);

    let restored = store.load_model(&latest.id).await.unwrap();
    assert_eq!(restored.to_json().unwrap(), warehouse(3).to_json().unwrap());
    assert!(ModelValidator::default().validate(&restored).unwrap().is_valid());

    store.delete_snapshot(&second.id).await.unwrap();
    assert_eq!(store.latest_snapshot("dw").await.unwrap().unwrap().id, first.id);
    let third = store
        .save_model("dw", &warehouse(2), serde_json::Value::Null)
        .await
        .unwrap();
    assert_eq!(third.version, 3);

    let ids: Vec<String> = store
        .list_snapshots("dw", None)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec!["dw@v3".to_string(), "dw@v1".to_string()]);

    let err = store.get_snapshot("dw@v2").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::SnapshotNotFound);
}

#[tokio::test]
async fn test_in_memory_store_workflow() {
    exercise(&InMemoryModelStore::new()).await;
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::{exercise, warehouse};
    use cwm_storage::{ErrorKind, ModelStore, SqliteModelStore};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_sqlite_store_workflow() {
        exercise(&SqliteModelStore::in_memory().unwrap()).await;
    }

    #[tokio::test]
    async fn test_sqlite_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.db");

        let saved = {
            let store = SqliteModelStore::open(&path).unwrap();
            store
                .save_model("dw", &warehouse(2), serde_json::Value::Null)
                .await
                .unwrap()
        };

        let store = SqliteModelStore::open(&path).unwrap();
        assert_eq!(store.get_snapshot(&saved.id).await.unwrap(), saved);
        assert_eq!(store.load_model(&saved.id).await.unwrap().len(), 6);
        let next = store
            .save_model("dw", &warehouse(1), serde_json::Value::Null)
            .await
            .unwrap();
        assert_eq!(next.version, 2);
    }

    #[tokio::test]
    async fn test_sqlite_detects_tampered_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.db");
        let store = SqliteModelStore::open(&path).unwrap();
        let saved = store
            .save_model("dw", &warehouse(1), serde_json::Value::Null)
            .await
            .unwrap();

        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute(
            "UPDATE snapshots SET content = replace(content, 't0', 'x0') WHERE snapshot_id = ?1",
            [&saved.id],
        )
        .unwrap();

        let err = store.load_model(&saved.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Integrity);
    }
}
