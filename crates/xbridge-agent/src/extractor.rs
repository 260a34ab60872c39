//! LLM-backed parameter extraction
//!
//! The extractor sits behind a trait so the pipeline can run against canned
//! details in tests. The real implementation wraps a `rig` agent built with
//! the fixed extraction preamble at temperature 0; one completion per query,
//! no retry on a malformed reply.

use async_trait::async_trait;
use rig::agent::Agent;
use rig::completion::{CompletionModel, Prompt};
use tracing::info;

use xbridge_types::TransactionDetails;

use crate::parsing::{parse_transaction_details, ExtractionError};
use crate::prompt::extraction_prompt;

/// Model used when the caller does not pick one.
pub const DEFAULT_EXTRACTION_MODEL: &str = "gpt-4o-mini";

/// Extraction seam for the orchestration pipeline.
#[async_trait]
pub trait DetailExtractor: Send + Sync {
    async fn extract(&self, query: &str) -> Result<TransactionDetails, ExtractionError>;
}

/// Extractor backed by a `rig` completion agent.
///
/// Construct the agent with [`crate::prompt::EXTRACTION_PREAMBLE`] and
/// temperature 0; see the binary for the wiring.
pub struct LlmExtractor<M: CompletionModel> {
    agent: Agent<M>,
}

impl<M: CompletionModel> LlmExtractor<M> {
    pub fn new(agent: Agent<M>) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl<M: CompletionModel> DetailExtractor for LlmExtractor<M> {
    async fn extract(&self, query: &str) -> Result<TransactionDetails, ExtractionError> {
        info!("[Extraction] extracting parameters from query");
        let reply = self.agent.prompt(extraction_prompt(query)).await?;
        let details = parse_transaction_details(&reply)?;
        info!(
            "[Extraction] {} {} on {} -> {} on {}",
            details.amount,
            details.from_token,
            details.from_chain,
            details.to_token,
            details.to_chain
        );
        Ok(details)
    }
}
