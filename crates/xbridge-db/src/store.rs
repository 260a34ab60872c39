//! Chain-document store
//!
//! One table, `chain_documents`, holding the descriptive text blob, the
//! source chain record (JSON), and the embedding vector (JSON). The seeder
//! replaces the whole collection on each run; the read path loads all rows
//! and ranks them by cosine similarity (the collection is small, a full
//! scan is the index).

use std::path::Path;
use tokio::fs;
use tracing::info;
use turso::{Builder, Connection};

use xbridge_types::{Chain, ChainDocument};

use crate::config::StoreConfig;
use crate::error::{DatabaseError, Result};

/// A document with its similarity score to a query embedding.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    pub document: ChainDocument,
    pub score: f64,
}

/// Store for embedded chain documents.
///
/// Holds one connection for its lifetime; released on drop on both success
/// and failure paths.
pub struct ChainDocumentStore {
    conn: Connection,
    config: StoreConfig,
}

impl ChainDocumentStore {
    /// Open the store and initialize its schema.
    pub async fn open(config: StoreConfig) -> Result<Self> {
        info!("[DB] Opening {} at {}", config.database_type(), config.path);

        // Ensure the database directory exists
        if let Some(parent) = Path::new(&config.path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DatabaseError::filesystem(parent.display().to_string(), e))?;
            }
        }

        let db = Builder::new_local(&config.path).build().await.map_err(|e| {
            DatabaseError::connection_with_source(
                format!("Failed to open database: {}", config.path),
                e,
            )
        })?;
        let conn = db.connect().map_err(|e| {
            DatabaseError::connection_with_source("Failed to establish database connection", e)
        })?;

        let store = Self { conn, config };
        store.initialize_schema().await?;
        Ok(store)
    }

    async fn initialize_schema(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS chain_documents (
                    id TEXT PRIMARY KEY,
                    page_content TEXT NOT NULL,
                    metadata TEXT NOT NULL,
                    embedding TEXT NOT NULL,
                    created_at INTEGER DEFAULT (strftime('%s', 'now'))
                )",
                (),
            )
            .await
            .map_err(|_e| DatabaseError::schema("Failed to create chain_documents table"))?;
        Ok(())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Delete every document in the collection.
    pub async fn clear(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM chain_documents", ())
            .await
            .map_err(|e| DatabaseError::query("Failed to clear chain_documents", e))?;
        info!("[DB] Cleared chain_documents");
        Ok(())
    }

    /// Bulk-insert documents; an existing id is overwritten.
    pub async fn insert_documents(&self, documents: &[ChainDocument]) -> Result<()> {
        let query = "
            INSERT INTO chain_documents (id, page_content, metadata, embedding)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                page_content = excluded.page_content,
                metadata = excluded.metadata,
                embedding = excluded.embedding;
        ";
        for document in documents {
            let metadata = serde_json::to_string(&document.metadata)
                .map_err(|e| DatabaseError::serialization("Failed to serialize chain metadata", e))?;
            let embedding = serde_json::to_string(&document.embedding)
                .map_err(|e| DatabaseError::serialization("Failed to serialize embedding", e))?;
            self.conn
                .execute(
                    query,
                    [
                        document.id.clone(),
                        document.page_content.clone(),
                        metadata,
                        embedding,
                    ],
                )
                .await
                .map_err(|e| DatabaseError::query("Failed to insert chain document", e))?;
        }
        info!("[DB] Inserted {} chain document(s)", documents.len());
        Ok(())
    }

    /// Number of documents in the collection.
    pub async fn count(&self) -> Result<i64> {
        let mut rows = self
            .conn
            .query("SELECT COUNT(*) FROM chain_documents", ())
            .await
            .map_err(|e| DatabaseError::query("Failed to count chain documents", e))?;
        if let Some(row) = rows.next().await? {
            let count: i64 = row
                .get(0)
                .map_err(|e| DatabaseError::row_with_source("Failed to read count", e))?;
            Ok(count)
        } else {
            Ok(0)
        }
    }

    /// Load every document in the collection.
    pub async fn all_documents(&self) -> Result<Vec<ChainDocument>> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, page_content, metadata, embedding FROM chain_documents",
                (),
            )
            .await
            .map_err(|e| DatabaseError::query("Failed to load chain documents", e))?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next().await? {
            let id: String = row
                .get(0)
                .map_err(|e| DatabaseError::row_with_source("Failed to read id", e))?;
            let page_content: String = row
                .get(1)
                .map_err(|e| DatabaseError::row_with_source("Failed to read page_content", e))?;
            let metadata_json: String = row
                .get(2)
                .map_err(|e| DatabaseError::row_with_source("Failed to read metadata", e))?;
            let embedding_json: String = row
                .get(3)
                .map_err(|e| DatabaseError::row_with_source("Failed to read embedding", e))?;

            let metadata: Chain = serde_json::from_str(&metadata_json)
                .map_err(|e| DatabaseError::serialization("Failed to parse chain metadata", e))?;
            let embedding: Vec<f64> = serde_json::from_str(&embedding_json)
                .map_err(|e| DatabaseError::serialization("Failed to parse embedding", e))?;

            documents.push(ChainDocument {
                id,
                page_content,
                metadata,
                embedding,
            });
        }
        Ok(documents)
    }

    /// The `k` documents most similar to `query_embedding`, best first.
    pub async fn top_k(&self, query_embedding: &[f64], k: usize) -> Result<Vec<ScoredDocument>> {
        let mut scored: Vec<ScoredDocument> = self
            .all_documents()
            .await?
            .into_iter()
            .map(|document| {
                let score = cosine_similarity(query_embedding, &document.embedding);
                ScoredDocument { document, score }
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(k);
        Ok(scored)
    }
}

/// Cosine similarity; 0.0 when either vector has zero norm or lengths differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = [0.5, -1.0, 2.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn cosine_handles_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
