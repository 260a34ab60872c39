//! Chain documents as stored in the seeded collection

use serde::{Deserialize, Serialize};

use crate::chain::Chain;

/// One seeded document: the descriptive text blob, the source chain record,
/// and the embedding vector computed from the blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDocument {
    /// Stable document id (the directory's `_id`, falling back to `chainId`)
    pub id: String,
    pub page_content: String,
    pub metadata: Chain,
    pub embedding: Vec<f64>,
}

impl ChainDocument {
    /// Build a document for a chain; the embedding is attached by the seeder
    /// after the batch embedding call.
    pub fn new(chain: Chain, page_content: String, embedding: Vec<f64>) -> Self {
        let id = if chain.id.is_empty() {
            chain.chain_id.clone()
        } else {
            chain.id.clone()
        };
        Self {
            id,
            page_content,
            metadata: chain,
            embedding,
        }
    }
}
