//! Aggregator HTTP client
//!
//! Thin reqwest wrapper around the three aggregator endpoints. Responses are
//! read as text first and decoded with serde_json so schema failures keep
//! the offending context instead of disappearing into a transport error.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument, warn};

use xbridge_types::{Chain, ChainQueryResult, Quote, QuoteRequest, Token};

use crate::error::LookupError;

/// Default aggregator endpoint; override with `ClientBuilder::base_url`.
pub const DEFAULT_AGGREGATOR_URL: &str = "https://aggregator-api.xbridge.dev";

/// Fixed directory pagination used by chain search.
const CHAIN_PAGE: u32 = 0;
const CHAIN_PAGE_LIMIT: u32 = 200;
const CHAIN_SORT_KEY: &str = "createdAt";
const CHAIN_SORT_ORDER: &str = "asc";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Every list endpoint wraps its payload in a `data` field.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Aggregator client builder
pub struct ClientBuilder<'a> {
    base_url: &'a str,
    http_client: Option<reqwest::Client>,
}

impl<'a> ClientBuilder<'a> {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_AGGREGATOR_URL,
            http_client: None,
        }
    }

    /// Set a custom base URL for the aggregator API
    pub fn base_url(mut self, base_url: &'a str) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set a custom HTTP client
    pub fn custom_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the aggregator client
    pub fn build(self) -> AggregatorClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default()
        });
        AggregatorClient::new(self.base_url, http_client)
    }
}

impl Default for ClientBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the bridge/swap aggregator API.
#[derive(Debug, Clone)]
pub struct AggregatorClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl AggregatorClient {
    /// Create a new client against `base_url`.
    pub fn new(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Create a new aggregator client builder
    pub fn builder<'a>() -> ClientBuilder<'a> {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON payload, preserving status and schema error detail.
    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: &'static str,
    ) -> Result<R, LookupError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await?;
        Self::decode(response, context).await
    }

    /// POST a JSON body, preserving status and schema error detail.
    async fn post<T: serde::Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
        context: &'static str,
    ) -> Result<R, LookupError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;
        Self::decode(response, context).await
    }

    async fn decode<R: DeserializeOwned>(
        response: reqwest::Response,
        context: &'static str,
    ) -> Result<R, LookupError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("[AggregatorClient] {context} request failed: HTTP {status}");
            return Err(LookupError::Status { status, body });
        }
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            warn!("[AggregatorClient] malformed {context} payload: {e}");
            LookupError::payload(context, e)
        })
    }

    /// Fetch one page of the chain directory.
    pub async fn fetch_chain_directory(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Chain>, LookupError> {
        let envelope: DataEnvelope<Vec<Chain>> = self
            .get(
                "chain",
                &[
                    ("page", page.to_string()),
                    ("limit", limit.to_string()),
                    ("sortKey", CHAIN_SORT_KEY.to_string()),
                    ("sortOrder", CHAIN_SORT_ORDER.to_string()),
                ],
                "chain directory",
            )
            .await?;
        Ok(envelope.data)
    }

    /// Search the chain directory for chains matching a free-text query.
    ///
    /// Fetches the 200 oldest-created records and filters them locally; zero
    /// matches is a successful empty result.
    #[instrument(name = "chain_lookup", skip(self))]
    pub async fn search_chains(&self, query: &str) -> Result<Vec<ChainQueryResult>, LookupError> {
        let chains = self
            .fetch_chain_directory(CHAIN_PAGE, CHAIN_PAGE_LIMIT)
            .await?;
        let matches: Vec<ChainQueryResult> = filter_chains(&chains, query)
            .into_iter()
            .map(|chain| chain.to_query_result(&self.base_url))
            .collect();
        if matches.is_empty() {
            info!("[ChainLookup] no chains matching '{query}'");
        } else {
            info!("[ChainLookup] {} chain(s) matching '{query}'", matches.len());
        }
        Ok(matches)
    }

    /// Find a token by symbol on a chain.
    ///
    /// Linear case-insensitive exact-match scan over the chain's full token
    /// list; `Ok(None)` means the symbol is not listed there.
    #[instrument(name = "token_lookup", skip(self))]
    pub async fn find_token(
        &self,
        chain_id: &str,
        symbol: &str,
    ) -> Result<Option<Token>, LookupError> {
        let envelope: DataEnvelope<Vec<Token>> = self
            .get(&format!("token/{chain_id}"), &[], "token list")
            .await?;
        let token = envelope
            .data
            .into_iter()
            .find(|token| token.symbol_matches(symbol));
        match &token {
            Some(token) => info!(
                "[TokenLookup] resolved {symbol} on chain {chain_id} to {}",
                token.address
            ),
            None => info!("[TokenLookup] {symbol} not listed on chain {chain_id}"),
        }
        Ok(token)
    }

    /// Fetch a quote for a resolved route.
    #[instrument(name = "quote_lookup", skip(self, request), fields(
        from_chain = %request.from_chain_id,
        to_chain = %request.to_chain_id,
        amount = %request.amount,
    ))]
    pub async fn fetch_quote(&self, request: &QuoteRequest) -> Result<Quote, LookupError> {
        let quote: Quote = self.post("quote", request, "quote").await?;
        info!(
            "[QuoteLookup] quote for {} {} -> {}: expected output {}",
            request.amount, request.from_chain_id, request.to_chain_id, quote.expected_output
        );
        Ok(quote)
    }
}

/// Case-insensitive substring filter over the searchable directory fields:
/// `name`, `chainId`, `type`, and the gas token symbol.
pub fn filter_chains<'a>(chains: &'a [Chain], query: &str) -> Vec<&'a Chain> {
    let needle = query.to_lowercase();
    chains
        .iter()
        .filter(|chain| {
            chain.name.to_lowercase().contains(&needle)
                || chain.chain_id.to_lowercase().contains(&needle)
                || chain.chain_type.to_lowercase().contains(&needle)
                || chain
                    .gas_token
                    .as_ref()
                    .is_some_and(|token| token.symbol.to_lowercase().contains(&needle))
        })
        .collect()
}
