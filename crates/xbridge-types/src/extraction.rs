//! Transaction details extracted from a free-text user query by the LLM

use serde::{Deserialize, Serialize};

/// The five parameters the extraction prompt asks the model for.
///
/// Every field is required; serde rejects a reply missing any of them.
/// `amount` stays a string on this type — numeric validation happens at the
/// extraction boundary, not in the data model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub from_chain: String,
    pub to_chain: String,
    pub amount: String,
    pub from_token: String,
    pub to_token: String,
}
