//! Database seeder: replace the chain-document collection with freshly
//! embedded directory records.
//!
//! Run-to-completion script. Fetches the (smaller) chain directory, builds
//! one descriptive blob per chain, computes embeddings in a single batch
//! call, clears the collection, and bulk-inserts. Exits non-zero on any
//! top-level failure; the store connection is released on scope exit on
//! both paths.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use rig::embeddings::EmbeddingModel;
use rig::prelude::*;
use rig::providers::openai;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use xbridge_client::{AggregatorClient, DEFAULT_AGGREGATOR_URL};
use xbridge_db::{describe_chain, ChainDocumentStore, StoreConfig};
use xbridge_types::{Chain, ChainDocument};

/// Directory page size used for seeding (smaller than chain search).
const SEED_PAGE_LIMIT: u32 = 50;

#[derive(Parser, Debug)]
#[command(name = "seeder", about = "Seed the chain-document store with embedded directory records")]
struct Args {
    /// Database path (falls back to XBRIDGE_DB_PATH, then xbridge.db)
    #[arg(long)]
    db_path: Option<String>,

    /// Aggregator API base URL (falls back to AGGREGATOR_BASE_URL, then the default)
    #[arg(long)]
    base_url: Option<String>,

    /// Embedding model
    #[arg(long, default_value = "text-embedding-3-small")]
    embedding_model: String,

    /// Number of directory records to seed
    #[arg(long, default_value_t = SEED_PAGE_LIMIT)]
    limit: u32,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("[Seeder] seeding failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let db_path = args
        .db_path
        .or_else(|| std::env::var("XBRIDGE_DB_PATH").ok())
        .unwrap_or_else(|| "xbridge.db".to_string());
    let base_url = args
        .base_url
        .or_else(|| std::env::var("AGGREGATOR_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_AGGREGATOR_URL.to_string());

    let store = ChainDocumentStore::open(StoreConfig::new(&db_path)).await?;
    let client = AggregatorClient::builder().base_url(&base_url).build();

    info!("[Seeder] fetching up to {} chains from {base_url}", args.limit);
    let chains = client
        .fetch_chain_directory(0, args.limit)
        .await
        .context("Failed to fetch chain directory")?;
    info!("[Seeder] fetched {} chain(s)", chains.len());

    let blobs: Vec<String> = chains.iter().map(describe_chain).collect();

    // Requires OPENAI_API_KEY in the environment (or .env).
    let openai_client = openai::Client::from_env();
    let model = openai_client.embedding_model(&args.embedding_model);
    let embeddings = model
        .embed_texts(blobs.clone())
        .await
        .context("Failed to compute embeddings")?;

    let vectors: Vec<Vec<f64>> = embeddings.into_iter().map(|e| e.vec).collect();
    let documents = build_documents(chains, blobs, vectors)?;

    store.clear().await.context("Failed to clear collection")?;
    store
        .insert_documents(&documents)
        .await
        .context("Failed to insert documents")?;

    let count = store.count().await?;
    info!("[Seeder] collection now holds {count} document(s)");
    Ok(())
}

/// Pair each chain with its blob and embedding vector.
///
/// A short embedding batch would otherwise truncate the zip silently and
/// seed an incomplete collection.
fn build_documents(
    chains: Vec<Chain>,
    blobs: Vec<String>,
    embeddings: Vec<Vec<f64>>,
) -> Result<Vec<ChainDocument>> {
    ensure!(
        chains.len() == embeddings.len(),
        "embedding batch returned {} vector(s) for {} chain(s)",
        embeddings.len(),
        chains.len()
    );
    Ok(chains
        .into_iter()
        .zip(blobs)
        .zip(embeddings)
        .map(|((chain, blob), embedding)| ChainDocument::new(chain, blob, embedding))
        .collect())
}
