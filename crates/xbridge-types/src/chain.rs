//! Chain directory records and the normalized query-result shape
//!
//! `Chain` mirrors the aggregator's `GET /chain` payload. Directory records
//! in the wild are frequently partial, so every field is defaultable;
//! `Chain::to_query_result` applies the normalization rules (absent strings
//! become "Unknown", absent booleans stay false, absent objects stay null).

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single chain record as returned by the aggregator's chain directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Chain {
    /// Directory-internal document id
    #[serde(rename = "_id")]
    pub id: String,
    /// Chain identifier (stringly typed on the wire, e.g. "137")
    pub chain_id: String,
    /// Human-readable chain name
    pub name: String,
    /// Chain family, e.g. "evm"
    #[serde(rename = "type")]
    pub chain_type: String,
    pub is_live: bool,
    pub is_intent_api_supported: bool,
    pub is_enabled_for_mainnet: bool,
    pub is_refuel_enabled: bool,
    #[serde(rename = "isQREnabled")]
    pub is_qr_enabled: bool,
    /// Per-flavor gas limits; null for chains the aggregator has not profiled
    pub gas_limit: Option<GasLimitConfig>,
    /// Native gas token; null for chains without one registered
    pub gas_token: Option<GasToken>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(rename = "__v")]
    pub version: i64,
}

/// Gas limits per bridging flavor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GasLimitConfig {
    pub trustless: Option<GasLimits>,
    pub mint_burn: Option<GasLimits>,
    pub circle: Option<GasLimits>,
}

/// Swap/transfer gas limit pair.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GasLimits {
    pub swap: Option<u64>,
    pub transfer: Option<u64>,
}

/// Native gas token of a chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GasToken {
    pub symbol: String,
    pub address: String,
}

/// Normalized per-chain record produced by a chain lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainQueryResult {
    pub chain: ChainSummary,
    pub gas: GasInfo,
    pub features: ChainFeatures,
    pub metadata: ChainTimestamps,
    /// Directory link for the chain
    pub url: String,
    /// RFC3339 time the record was produced
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSummary {
    pub name: String,
    pub chain_id: String,
    #[serde(rename = "type")]
    pub chain_type: String,
    pub is_live: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasInfo {
    pub token: Option<GasToken>,
    pub limits: Option<GasLimitConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainFeatures {
    pub intent_api: bool,
    pub mainnet: bool,
    pub refuel: bool,
    pub qr: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainTimestamps {
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Replace an absent directory string with the normalized placeholder.
fn or_unknown(value: &str) -> String {
    if value.trim().is_empty() {
        "Unknown".to_string()
    } else {
        value.to_string()
    }
}

impl Chain {
    /// Normalize this directory record into a `ChainQueryResult`.
    ///
    /// `url_base` is the aggregator base URL; the record's `url` points at
    /// the chain's directory entry under it.
    pub fn to_query_result(&self, url_base: &str) -> ChainQueryResult {
        let chain_id = or_unknown(&self.chain_id);
        ChainQueryResult {
            chain: ChainSummary {
                name: or_unknown(&self.name),
                chain_id: chain_id.clone(),
                chain_type: or_unknown(&self.chain_type),
                is_live: self.is_live,
            },
            gas: GasInfo {
                token: self.gas_token.clone(),
                limits: self.gas_limit.clone(),
            },
            features: ChainFeatures {
                intent_api: self.is_intent_api_supported,
                mainnet: self.is_enabled_for_mainnet,
                refuel: self.is_refuel_enabled,
                qr: self.is_qr_enabled,
            },
            metadata: ChainTimestamps {
                created_at: self.created_at.clone(),
                updated_at: self.updated_at.clone(),
            },
            url: format!("{}/chain/{}", url_base.trim_end_matches('/'), chain_id),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
