//! Client-boundary tests against a loopback HTTP server.
//!
//! Each test binds a one-shot TCP listener that answers with a canned HTTP
//! response, so the status and payload error mappings are exercised through
//! the real reqwest/serde decode path.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use xbridge_client::{AggregatorClient, LookupError};
use xbridge_types::QuoteRequest;

/// Serve exactly one canned response on a loopback port; returns the base URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf).await;
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
    });
    format!("http://{addr}")
}

fn quote_request() -> QuoteRequest {
    QuoteRequest {
        from_chain_id: "56".to_string(),
        to_chain_id: "137".to_string(),
        from_token_address: "0xfrom".to_string(),
        to_token_address: "0xto".to_string(),
        amount: "50".to_string(),
    }
}

#[tokio::test]
async fn quote_body_missing_field_is_a_payload_error() {
    // 200 OK, but the body has no priceImpact
    let base = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"estimatedGas":21000,"route":[],"expectedOutput":"49.87"}"#,
    )
    .await;
    let client = AggregatorClient::builder().base_url(&base).build();

    let err = client.fetch_quote(&quote_request()).await.unwrap_err();
    assert!(matches!(err, LookupError::Payload { context: "quote", .. }));
}

#[tokio::test]
async fn upstream_failure_maps_to_status_error() {
    let base = serve_once("HTTP/1.1 500 Internal Server Error", "upstream unavailable").await;
    let client = AggregatorClient::builder().base_url(&base).build();

    let err = client.fetch_quote(&quote_request()).await.unwrap_err();
    match err {
        LookupError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("upstream unavailable"));
        }
        other => panic!("expected a status error, got: {other}"),
    }
}

#[tokio::test]
async fn complete_quote_body_decodes() {
    let base = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"estimatedGas":184000,"route":[{"bridge":"trustless"}],"expectedOutput":"49.875","priceImpact":"0.25"}"#,
    )
    .await;
    let client = AggregatorClient::builder().base_url(&base).build();

    let quote = client.fetch_quote(&quote_request()).await.unwrap();
    assert_eq!(quote.expected_output, "49.875");
    assert_eq!(quote.price_impact, "0.25");
    assert_eq!(quote.route.len(), 1);
}
