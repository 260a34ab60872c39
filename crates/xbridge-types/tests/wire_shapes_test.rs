//! Deserialization tests against realistic aggregator payloads.

use rstest::rstest;
use xbridge_types::{Chain, Quote, Token};

const DIRECTORY_RECORD: &str = r#"{
    "_id": "65f1a2b3c4d5e6f7a8b9c0d1",
    "chainId": "137",
    "name": "Polygon",
    "type": "evm",
    "isLive": true,
    "isIntentApiSupported": true,
    "isEnabledForMainnet": true,
    "isRefuelEnabled": false,
    "isQREnabled": true,
    "gasLimit": {
        "trustless": {"swap": 800000, "transfer": 40000},
        "mintBurn": {"swap": 600000, "transfer": 30000},
        "circle": null
    },
    "gasToken": {"symbol": "MATIC", "address": "0x0000000000000000000000000000000000001010"},
    "createdAt": "2024-01-01T00:00:00.000Z",
    "updatedAt": "2024-06-01T00:00:00.000Z",
    "__v": 3
}"#;

#[test]
fn full_directory_record_deserializes() {
    let chain: Chain = serde_json::from_str(DIRECTORY_RECORD).unwrap();
    assert_eq!(chain.id, "65f1a2b3c4d5e6f7a8b9c0d1");
    assert_eq!(chain.chain_id, "137");
    assert_eq!(chain.chain_type, "evm");
    assert!(chain.is_qr_enabled);
    assert!(!chain.is_refuel_enabled);
    assert_eq!(chain.gas_token.as_ref().unwrap().symbol, "MATIC");
    let limits = chain.gas_limit.as_ref().unwrap();
    assert_eq!(limits.trustless.unwrap().swap, Some(800_000));
    assert!(limits.circle.is_none());
    assert_eq!(chain.version, 3);
}

#[test]
fn token_list_entry_deserializes() {
    let token: Token = serde_json::from_str(
        r#"{"symbol":"USDT","address":"0x55d398326f99059fF775485246999027B3197955","decimals":18,"chainId":"56"}"#,
    )
    .unwrap();
    assert_eq!(token.symbol, "USDT");
    assert_eq!(token.decimals, 18);
}

#[rstest]
#[case(r#"{"route":[],"expectedOutput":"49.8","priceImpact":"0.1"}"#)]
#[case(r#"{"estimatedGas":21000,"expectedOutput":"49.8","priceImpact":"0.1"}"#)]
#[case(r#"{"estimatedGas":21000,"route":[],"priceImpact":"0.1"}"#)]
#[case(r#"{"estimatedGas":21000,"route":[],"expectedOutput":"49.8"}"#)]
fn quote_missing_any_field_is_rejected(#[case] payload: &str) {
    assert!(serde_json::from_str::<Quote>(payload).is_err());
}

#[test]
fn quote_with_opaque_route_legs_deserializes() {
    let quote: Quote = serde_json::from_str(
        r#"{
            "estimatedGas": 184000,
            "route": [{"bridge": "trustless", "fromChain": "56", "toChain": "137"}],
            "expectedOutput": "49.875",
            "priceImpact": "0.25"
        }"#,
    )
    .unwrap();
    assert_eq!(quote.route.len(), 1);
    assert_eq!(quote.expected_output, "49.875");
}
