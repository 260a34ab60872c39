//! Descriptive text blobs for chain records
//!
//! One flattened sentence-per-aspect blob per chain; this is the text the
//! embeddings are computed from, so it spells out the feature flags, gas
//! token, gas limits, and metadata rather than relying on field names.

use xbridge_types::{Chain, GasLimits};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn limits_fragment(label: &str, limits: Option<&GasLimits>) -> String {
    match limits {
        Some(limits) => format!(
            "{label} swap {} transfer {}",
            limits
                .swap
                .map(|v| v.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
            limits
                .transfer
                .map(|v| v.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
        ),
        None => format!("{label} n/a"),
    }
}

/// Build the embedding source text for a chain directory record.
pub fn describe_chain(chain: &Chain) -> String {
    let mut text = format!(
        "{} is a {} chain with chain ID {}. It is {}.",
        if chain.name.is_empty() { "Unknown" } else { &chain.name },
        if chain.chain_type.is_empty() { "unknown-type" } else { &chain.chain_type },
        if chain.chain_id.is_empty() { "unknown" } else { &chain.chain_id },
        if chain.is_live { "live" } else { "not live" },
    );

    text.push_str(&format!(
        " Features: intent API {}, mainnet {}, refuel {}, QR {}.",
        yes_no(chain.is_intent_api_supported),
        yes_no(chain.is_enabled_for_mainnet),
        yes_no(chain.is_refuel_enabled),
        yes_no(chain.is_qr_enabled),
    ));

    match &chain.gas_token {
        Some(token) => text.push_str(&format!(
            " Gas token: {} at {}.",
            token.symbol, token.address
        )),
        None => text.push_str(" Gas token: none registered."),
    }

    match &chain.gas_limit {
        Some(limits) => text.push_str(&format!(
            " Gas limits: {}; {}; {}.",
            limits_fragment("trustless", limits.trustless.as_ref()),
            limits_fragment("mint-burn", limits.mint_burn.as_ref()),
            limits_fragment("circle", limits.circle.as_ref()),
        )),
        None => text.push_str(" Gas limits: not profiled."),
    }

    if let Some(created) = &chain.created_at {
        text.push_str(&format!(" Created {created}."));
    }
    if let Some(updated) = &chain.updated_at {
        text.push_str(&format!(" Updated {updated}."));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use xbridge_types::{GasLimitConfig, GasToken};

    #[test]
    fn blob_mentions_name_features_and_gas_token() {
        let chain = Chain {
            chain_id: "137".to_string(),
            name: "Polygon".to_string(),
            chain_type: "evm".to_string(),
            is_live: true,
            is_intent_api_supported: true,
            is_qr_enabled: true,
            gas_token: Some(GasToken {
                symbol: "MATIC".to_string(),
                address: "0x1010".to_string(),
            }),
            gas_limit: Some(GasLimitConfig {
                trustless: Some(GasLimits {
                    swap: Some(800_000),
                    transfer: Some(40_000),
                }),
                ..Default::default()
            }),
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        let blob = describe_chain(&chain);
        assert!(blob.contains("Polygon"));
        assert!(blob.contains("chain ID 137"));
        assert!(blob.contains("It is live"));
        assert!(blob.contains("intent API yes"));
        assert!(blob.contains("MATIC"));
        assert!(blob.contains("trustless swap 800000 transfer 40000"));
        assert!(blob.contains("Created 2024-01-01T00:00:00Z"));
    }

    #[test]
    fn blob_handles_sparse_records() {
        let blob = describe_chain(&Chain::default());
        assert!(blob.contains("Unknown"));
        assert!(blob.contains("not live"));
        assert!(blob.contains("Gas token: none registered"));
        assert!(blob.contains("Gas limits: not profiled"));
        assert!(!blob.contains("Created "));
    }
}
