//! Store round-trip tests against a tempfile database.

use tempfile::tempdir;

use xbridge_db::{ChainDocumentStore, StoreConfig};
use xbridge_types::{Chain, ChainDocument};

fn document(id: &str, name: &str, embedding: Vec<f64>) -> ChainDocument {
    let chain = Chain {
        id: id.to_string(),
        chain_id: id.to_string(),
        name: name.to_string(),
        chain_type: "evm".to_string(),
        is_live: true,
        ..Default::default()
    };
    ChainDocument::new(chain, format!("{name} is a live evm chain."), embedding)
}

#[tokio::test]
async fn insert_count_clear_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.db");
    let store = ChainDocumentStore::open(StoreConfig::new(path.to_string_lossy().to_string()))
        .await
        .unwrap();

    let documents = vec![
        document("56", "BSC", vec![1.0, 0.0]),
        document("137", "Polygon", vec![0.0, 1.0]),
    ];
    store.insert_documents(&documents).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 2);

    // Re-inserting the same ids overwrites instead of duplicating.
    store.insert_documents(&documents).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 2);

    store.clear().await.unwrap();
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn loaded_documents_preserve_metadata_and_embedding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.db");
    let store = ChainDocumentStore::open(StoreConfig::new(path.to_string_lossy().to_string()))
        .await
        .unwrap();

    store
        .insert_documents(&[document("137", "Polygon", vec![0.25, -0.5])])
        .await
        .unwrap();

    let documents = store.all_documents().await.unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, "137");
    assert_eq!(documents[0].metadata.name, "Polygon");
    assert!(documents[0].metadata.is_live);
    assert_eq!(documents[0].embedding, vec![0.25, -0.5]);
    assert!(documents[0].page_content.contains("Polygon"));
}

#[tokio::test]
async fn top_k_ranks_by_cosine_similarity() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.db");
    let store = ChainDocumentStore::open(StoreConfig::new(path.to_string_lossy().to_string()))
        .await
        .unwrap();

    store
        .insert_documents(&[
            document("56", "BSC", vec![1.0, 0.0]),
            document("137", "Polygon", vec![0.0, 1.0]),
        ])
        .await
        .unwrap();

    let ranked = store.top_k(&[1.0, 0.0], 1).await.unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].document.metadata.name, "BSC");
    assert!((ranked[0].score - 1.0).abs() < 1e-12);

    let all = store.top_k(&[0.0, 1.0], 10).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].document.metadata.name, "Polygon");
    assert!(all[0].score > all[1].score);
}
