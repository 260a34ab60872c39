//! Model-reply parsing
//!
//! Extracts the transaction-details object out of a free-text model reply.
//! The contract is bounded best-effort: take the first balanced `{...}`
//! object (string- and escape-aware), parse it as JSON, deserialize into
//! `TransactionDetails`, then validate the amount. A reply with no balanced
//! object fails with `NoJsonObject`; there is no retry at this layer.

use thiserror::Error;
use tracing::debug;

use xbridge_types::TransactionDetails;

/// Failures while turning a model reply into `TransactionDetails`.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("model reply contained no JSON object")]
    NoJsonObject,

    #[error("model reply did not match the transaction-details schema: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid amount '{0}': expected a positive decimal number")]
    InvalidAmount(String),

    #[error("language model call failed: {0}")]
    Completion(#[from] rig::completion::PromptError),
}

/// Return the first balanced top-level `{...}` object in `text`.
///
/// Brace depth is tracked outside string literals only, honoring `\`
/// escapes, so braces inside JSON strings do not unbalance the scan.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Reject amounts that are not finite, strictly positive decimals.
pub fn validate_amount(amount: &str) -> Result<(), ExtractionError> {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(()),
        _ => Err(ExtractionError::InvalidAmount(amount.to_string())),
    }
}

/// Parse a model reply into validated `TransactionDetails`.
pub fn parse_transaction_details(reply: &str) -> Result<TransactionDetails, ExtractionError> {
    let object = extract_json_object(reply).ok_or(ExtractionError::NoJsonObject)?;
    debug!("[Extraction] candidate object: {object}");
    let details: TransactionDetails = serde_json::from_str(object)?;
    validate_amount(&details.amount)?;
    Ok(details)
}
