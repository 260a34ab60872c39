//! Token records from the aggregator's per-chain token list

use serde::{Deserialize, Serialize};

/// A token as listed by `GET /token/{chainId}`.
///
/// `address` is chain-specific and must never be reused across chains;
/// symbol matching is case-insensitive everywhere in this workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    pub address: String,
    pub decimals: u8,
    pub chain_id: String,
}

impl Token {
    /// Case-insensitive exact symbol comparison.
    pub fn symbol_matches(&self, symbol: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_match_is_case_insensitive() {
        let token = Token {
            symbol: "USDC".to_string(),
            address: "0xa0b8...".to_string(),
            decimals: 6,
            chain_id: "137".to_string(),
        };
        assert!(token.symbol_matches("usdc"));
        assert!(token.symbol_matches("USDC"));
        assert!(!token.symbol_matches("USDT"));
    }
}
