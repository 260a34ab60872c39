//! # Xbridge DB
//!
//! Turso/SQLite-backed store for embedded chain documents. The `seeder`
//! binary fetches the chain directory, builds one descriptive text blob per
//! chain, computes embeddings, and replaces the collection contents; the
//! store's read path ranks documents by cosine similarity for semantic
//! search.

pub mod config;
pub mod describe;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use describe::describe_chain;
pub use error::{DatabaseError, Result};
pub use store::{ChainDocumentStore, ScoredDocument};
