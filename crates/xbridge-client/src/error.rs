//! Unified error type for aggregator lookups

use thiserror::Error;

/// The one failure type shared by chain, token, and quote lookups.
///
/// Callers that need "not found" look at the success value, never here.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Request never completed (DNS, connect, timeout, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The aggregator answered with a non-2xx status
    #[error("aggregator returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not match the expected schema
    #[error("malformed {context} payload: {source}")]
    Payload {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    pub fn payload(context: &'static str, source: serde_json::Error) -> Self {
        Self::Payload { context, source }
    }

    /// Short kind tag used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Payload { .. } => "payload",
        }
    }
}
