//! # Xbridge Client
//!
//! HTTP client for the bridge/swap aggregator API: the paginated chain
//! directory, per-chain token lists, and quote requests.
//!
//! All three lookups share one error convention: `Result<_, LookupError>`
//! with the error kind preserved (transport, HTTP status, malformed
//! payload). "Not found" is data, not an error — an empty match list from
//! `search_chains` and `Ok(None)` from `find_token` are successful results.

pub mod api;
pub mod client;
pub mod error;

pub use api::BridgeApi;
pub use client::{AggregatorClient, ClientBuilder, DEFAULT_AGGREGATOR_URL};
pub use error::LookupError;
