//! The lookup seam the orchestration pipeline runs against.

use async_trait::async_trait;

use xbridge_types::{ChainQueryResult, Quote, QuoteRequest, Token};

use crate::client::AggregatorClient;
use crate::error::LookupError;

/// The three aggregator lookups, abstracted so the pipeline can be exercised
/// against counting mocks in tests.
#[async_trait]
pub trait BridgeApi: Send + Sync {
    /// Chains whose searchable fields contain `query` (case-insensitive).
    async fn search_chains(&self, query: &str) -> Result<Vec<ChainQueryResult>, LookupError>;

    /// First token on `chain_id` whose symbol matches case-insensitively.
    async fn find_token(&self, chain_id: &str, symbol: &str)
        -> Result<Option<Token>, LookupError>;

    /// Quote for a fully resolved route.
    async fn fetch_quote(&self, request: &QuoteRequest) -> Result<Quote, LookupError>;
}

#[async_trait]
impl BridgeApi for AggregatorClient {
    async fn search_chains(&self, query: &str) -> Result<Vec<ChainQueryResult>, LookupError> {
        AggregatorClient::search_chains(self, query).await
    }

    async fn find_token(
        &self,
        chain_id: &str,
        symbol: &str,
    ) -> Result<Option<Token>, LookupError> {
        AggregatorClient::find_token(self, chain_id, symbol).await
    }

    async fn fetch_quote(&self, request: &QuoteRequest) -> Result<Quote, LookupError> {
        AggregatorClient::fetch_quote(self, request).await
    }
}
