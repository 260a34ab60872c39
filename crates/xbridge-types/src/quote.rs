//! Quote request/response shapes for `POST /quote`

use serde::{Deserialize, Serialize};

/// Request body for a bridge/swap quote.
///
/// A quote is valid only for the exact tuple that produced it; requests are
/// rebuilt per pipeline run and never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub from_chain_id: String,
    pub to_chain_id: String,
    pub from_token_address: String,
    pub to_token_address: String,
    /// Decimal amount as entered by the user
    pub amount: String,
}

/// A priced, non-binding quote.
///
/// All four fields are required on the wire; a response missing any of them
/// fails deserialization and is surfaced as a payload error by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub estimated_gas: f64,
    /// Route legs as returned by the aggregator, passed through opaquely
    pub route: Vec<serde_json::Value>,
    pub expected_output: String,
    pub price_impact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_requires_every_field() {
        let missing_price_impact = r#"{
            "estimatedGas": 21000,
            "route": [],
            "expectedOutput": "49.87"
        }"#;
        assert!(serde_json::from_str::<Quote>(missing_price_impact).is_err());
    }

    #[test]
    fn quote_request_serializes_camel_case() {
        let request = QuoteRequest {
            from_chain_id: "56".to_string(),
            to_chain_id: "137".to_string(),
            from_token_address: "0xfrom".to_string(),
            to_token_address: "0xto".to_string(),
            amount: "50".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["fromChainId"], "56");
        assert_eq!(value["toTokenAddress"], "0xto");
        assert_eq!(value["amount"], "50");
    }
}
