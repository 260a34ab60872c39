//! CLI entry point: one query in, one priced route (or a user-facing
//! failure message plus diagnostic) out.

use anyhow::Result;
use clap::Parser;
use rig::prelude::*;
use rig::providers::openai;
use tracing::error;
use tracing_subscriber::EnvFilter;

use xbridge_agent::{
    prompt::EXTRACTION_PREAMBLE, LlmExtractor, QuotePipeline, DEFAULT_EXTRACTION_MODEL,
};
use xbridge_client::{AggregatorClient, DEFAULT_AGGREGATOR_URL};

#[derive(Parser, Debug)]
#[command(name = "xbridge-agent", about = "Quote a cross-chain bridge/swap from a free-text request")]
struct Args {
    /// Free-text request, e.g. "Bridge 50 USDT from BSC to Polygon"
    query: String,

    /// Completion model used for parameter extraction
    #[arg(long, default_value = DEFAULT_EXTRACTION_MODEL)]
    model: String,

    /// Aggregator API base URL (falls back to AGGREGATOR_BASE_URL, then the default)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let base_url = args
        .base_url
        .or_else(|| std::env::var("AGGREGATOR_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_AGGREGATOR_URL.to_string());

    let client = AggregatorClient::builder().base_url(&base_url).build();

    // Requires OPENAI_API_KEY in the environment (or .env).
    let openai_client = openai::Client::from_env();
    let agent = openai_client
        .agent(&args.model)
        .preamble(EXTRACTION_PREAMBLE)
        .temperature(0.0)
        .build();
    let pipeline = QuotePipeline::new(client, LlmExtractor::new(agent));

    match pipeline.run(&args.query).await {
        Ok(summary) => {
            println!("{}", summary.message);
            println!("{}", serde_json::to_string_pretty(&summary.artifact)?);
            Ok(())
        }
        Err(e) => {
            error!("[xbridge-agent] pipeline halted: {e}");
            eprintln!("{}", e.user_message());
            eprintln!("{}", serde_json::to_string_pretty(&e.diagnostic())?);
            std::process::exit(1);
        }
    }
}
