//! Bridge-quote orchestration
//!
//! Stages: extraction, chain resolution (both sides in parallel), token
//! resolution (both sides in parallel), quote fetch, formatting. Every stage
//! is a hard gate: the first failure halts the run and maps to a fixed
//! user-facing message plus a JSON diagnostic. State is request-local; no
//! stage result is cached between runs.

use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

use xbridge_client::{BridgeApi, LookupError};
use xbridge_types::{ChainQueryResult, Quote, QuoteRequest, Token, TransactionDetails};

use crate::extractor::DetailExtractor;
use crate::parsing::{validate_amount, ExtractionError};

/// Which leg of the route a stage failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::From => write!(f, "from"),
            Side::To => write!(f, "to"),
        }
    }
}

/// A pipeline stage failure.
///
/// `user_message` yields the fixed user-facing string for the failed stage;
/// `diagnostic` a structured payload for logs and callers that want detail.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("chain lookup failed on the {side} side: {source}")]
    ChainLookup {
        side: Side,
        #[source]
        source: LookupError,
    },

    #[error("no chain found matching '{query}' on the {side} side")]
    ChainNotFound { side: Side, query: String },

    #[error("token lookup failed on the {side} side: {source}")]
    TokenLookup {
        side: Side,
        #[source]
        source: LookupError,
    },

    #[error("token '{symbol}' not found on the {chain} chain ({side} side)")]
    TokenNotFound {
        side: Side,
        symbol: String,
        chain: String,
    },

    #[error("quote lookup failed: {source}")]
    QuoteLookup {
        #[source]
        source: LookupError,
    },

    #[error("failed to serialize pipeline output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    /// Stage tag used in diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Extraction(_) => "extraction",
            Self::ChainLookup { .. } | Self::ChainNotFound { .. } => "chain_lookup",
            Self::TokenLookup { .. } | Self::TokenNotFound { .. } => "token_lookup",
            Self::QuoteLookup { .. } => "quote_lookup",
            Self::Serialization(_) => "formatting",
        }
    }

    /// Fixed user-facing message for the failed stage.
    pub fn user_message(&self) -> String {
        match self {
            Self::Extraction(_) => {
                "Could not understand the request. Please rephrase it with the amount, tokens, and chains.".to_string()
            }
            Self::ChainLookup { .. } => {
                "Failed to fetch chain details. Please try again later.".to_string()
            }
            Self::ChainNotFound { query, .. } => {
                format!("No supported chain found matching '{query}'.")
            }
            Self::TokenLookup { .. } => {
                "Failed to fetch token details. Please try again later.".to_string()
            }
            Self::TokenNotFound { symbol, chain, .. } => {
                format!("Could not find token {symbol} on the {chain} chain.")
            }
            Self::QuoteLookup { .. } => {
                "Failed to fetch a quote for this route. Please try again later.".to_string()
            }
            Self::Serialization(_) => "Failed to format the result.".to_string(),
        }
    }

    /// Structured diagnostic payload.
    pub fn diagnostic(&self) -> serde_json::Value {
        let kind = match self {
            Self::ChainLookup { source, .. }
            | Self::TokenLookup { source, .. }
            | Self::QuoteLookup { source } => Some(source.kind()),
            _ => None,
        };
        json!({
            "stage": self.stage(),
            "kind": kind,
            "error": self.to_string(),
        })
    }
}

/// Structured result of a successful run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteArtifact {
    pub from_chain: ChainQueryResult,
    pub to_chain: ChainQueryResult,
    pub from_token: Token,
    pub to_token: Token,
    pub amount: String,
    pub quote: Quote,
}

/// The pipeline's two-part output: a human-readable summary and the raw
/// structured data behind it.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteSummary {
    pub message: String,
    pub artifact: QuoteArtifact,
}

impl QuoteSummary {
    pub fn into_parts(self) -> (String, QuoteArtifact) {
        (self.message, self.artifact)
    }
}

/// Resolve chains and tokens for `details` and fetch a quote.
///
/// This is the extraction-free tail of the pipeline, shared by
/// [`QuotePipeline::run`] and the `bridge_quote` rig tool.
pub async fn resolve_and_quote<B: BridgeApi>(
    api: &B,
    details: &TransactionDetails,
) -> Result<QuoteSummary, PipelineError> {
    validate_amount(&details.amount).map_err(PipelineError::Extraction)?;

    // Both chain lookups in flight together; both must succeed.
    let (from_chains, to_chains) = tokio::join!(
        api.search_chains(&details.from_chain),
        api.search_chains(&details.to_chain),
    );
    let from_chain = first_chain(from_chains, Side::From, &details.from_chain)?;
    let to_chain = first_chain(to_chains, Side::To, &details.to_chain)?;
    info!(
        "[Pipeline] resolved chains: {} ({}) -> {} ({})",
        from_chain.chain.name, from_chain.chain.chain_id, to_chain.chain.name, to_chain.chain.chain_id
    );

    // Token resolution fans out the same way.
    let (from_token, to_token) = tokio::join!(
        api.find_token(&from_chain.chain.chain_id, &details.from_token),
        api.find_token(&to_chain.chain.chain_id, &details.to_token),
    );
    let from_token = required_token(from_token, Side::From, &details.from_token, &from_chain)?;
    let to_token = required_token(to_token, Side::To, &details.to_token, &to_chain)?;

    let request = QuoteRequest {
        from_chain_id: from_chain.chain.chain_id.clone(),
        to_chain_id: to_chain.chain.chain_id.clone(),
        from_token_address: from_token.address.clone(),
        to_token_address: to_token.address.clone(),
        amount: details.amount.clone(),
    };
    let quote = api
        .fetch_quote(&request)
        .await
        .map_err(|source| PipelineError::QuoteLookup { source })?;

    let message = format_summary(details, &from_chain, &to_chain, &to_token, &quote);
    Ok(QuoteSummary {
        message,
        artifact: QuoteArtifact {
            from_chain,
            to_chain,
            from_token,
            to_token,
            amount: details.amount.clone(),
            quote,
        },
    })
}

fn first_chain(
    result: Result<Vec<ChainQueryResult>, LookupError>,
    side: Side,
    query: &str,
) -> Result<ChainQueryResult, PipelineError> {
    let matches = result.map_err(|source| {
        warn!("[Pipeline] chain lookup failed on {side} side: {source}");
        PipelineError::ChainLookup { side, source }
    })?;
    // A query may match several chains; the pipeline uses the first.
    matches
        .into_iter()
        .next()
        .ok_or_else(|| PipelineError::ChainNotFound {
            side,
            query: query.to_string(),
        })
}

fn required_token(
    result: Result<Option<Token>, LookupError>,
    side: Side,
    symbol: &str,
    chain: &ChainQueryResult,
) -> Result<Token, PipelineError> {
    result
        .map_err(|source| {
            warn!("[Pipeline] token lookup failed on {side} side: {source}");
            PipelineError::TokenLookup { side, source }
        })?
        .ok_or_else(|| PipelineError::TokenNotFound {
            side,
            symbol: symbol.to_string(),
            chain: chain.chain.name.clone(),
        })
}

fn format_summary(
    details: &TransactionDetails,
    from_chain: &ChainQueryResult,
    to_chain: &ChainQueryResult,
    to_token: &Token,
    quote: &Quote,
) -> String {
    format!(
        "Found route to {} on {} chain. Bridging {} {} from {} is expected to yield {} {} \
         (price impact {}%, estimated gas {}). The route has {} leg(s).",
        to_token.symbol,
        to_chain.chain.name,
        details.amount,
        details.from_token,
        from_chain.chain.name,
        quote.expected_output,
        to_token.symbol,
        quote.price_impact,
        quote.estimated_gas,
        quote.route.len(),
    )
}

/// The full query-to-quote pipeline.
pub struct QuotePipeline<B, E> {
    api: B,
    extractor: E,
}

impl<B: BridgeApi, E: DetailExtractor> QuotePipeline<B, E> {
    pub fn new(api: B, extractor: E) -> Self {
        Self { api, extractor }
    }

    /// Run the whole pipeline on a free-text query.
    pub async fn run(&self, query: &str) -> Result<QuoteSummary, PipelineError> {
        let details = self.extractor.extract(query).await?;
        self.resolve_and_quote(&details).await
    }

    /// Run the extraction-free tail on pre-extracted details.
    pub async fn resolve_and_quote(
        &self,
        details: &TransactionDetails,
    ) -> Result<QuoteSummary, PipelineError> {
        resolve_and_quote(&self.api, details).await
    }
}
