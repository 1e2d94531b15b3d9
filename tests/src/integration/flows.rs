//! # Integration Test Flows
//!
//! Every request shape a plugin host (or an impostor) can send, pushed
//! through a real axum router guarded by `HostSignLayer`.
//!
//! ## Propagation policy under test
//!
//! - No envelope / malformed envelope / bad referrer: handler runs, no client
//! - Verified signature: handler runs with the verified client
//! - Unknown client / signature mismatch: 401 JSON-RPC error, handler skipped

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use axum::http::StatusCode;
    use hostsign_gateway::{HostSignConfig, HostSignLayer};
    use serde_json::Value;

    fn guarded() -> axum::Router {
        app(HostSignLayer::from_config(&HostSignConfig::default(), directory()))
    }

    // =============================================================================
    // Pass-through
    // =============================================================================

    #[tokio::test]
    async fn test_request_without_envelope_reaches_handler() {
        let (status, body) = send(guarded(), rpc_request(None, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["client"], Value::Null);
    }

    #[tokio::test]
    async fn test_malformed_envelope_reaches_handler_unverified() {
        let referrer = page_frame(ALICE_ID);
        let bad = [
            "garbage",
            r#"{"noncestr":"n","timestamp":"t"}"#,
            r#"{"noncestr":"n","timestamp":42,"signature":"s"}"#,
        ];

        for raw in bad {
            let (status, body) = send(guarded(), rpc_request(Some(raw), Some(&referrer))).await;
            assert_eq!(status, StatusCode::OK, "input: {raw}");
            assert_eq!(body["result"]["client"], Value::Null, "input: {raw}");
        }
    }

    #[tokio::test]
    async fn test_unrecognized_referrer_is_not_fatal() {
        let raw = envelope(NONCE, TIMESTAMP, "test-signature");

        let (status, body) = send(
            guarded(),
            rpc_request(Some(&raw), Some("https://invalid-url.com")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["client"], Value::Null);
    }

    #[tokio::test]
    async fn test_missing_referrer_is_not_fatal() {
        let raw = signed_envelope(ALICE_ID, ALICE_TOKEN, NONCE, TIMESTAMP);

        let (status, body) = send(guarded(), rpc_request(Some(&raw), None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["client"], Value::Null);
    }

    // =============================================================================
    // Verification
    // =============================================================================

    #[tokio::test]
    async fn test_valid_signature_identifies_client() {
        let raw = signed_envelope(ALICE_ID, ALICE_TOKEN, NONCE, TIMESTAMP);

        let (status, body) = send(
            guarded(),
            rpc_request(Some(&raw), Some(&page_frame(ALICE_ID))),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["client"], ALICE_ID);
    }

    #[tokio::test]
    async fn test_each_client_verifies_with_its_own_secret() {
        let raw = signed_envelope(BOB_ID, BOB_TOKEN, "bob-nonce", "1700000000");

        let (status, body) = send(
            guarded(),
            rpc_request(Some(&raw), Some(&page_frame(BOB_ID))),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["client"], BOB_ID);
    }

    #[tokio::test]
    async fn test_invalid_signature_is_rejected() {
        let raw = envelope(NONCE, TIMESTAMP, "invalid-signature");

        let (status, body) = send(
            guarded(),
            rpc_request(Some(&raw), Some(&page_frame(ALICE_ID))),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["error"]["code"], -32010);
        assert_eq!(
            body["error"]["message"],
            "invalid request, check plugin configuration"
        );
        assert!(body.get("result").is_none());
    }

    #[tokio::test]
    async fn test_unknown_client_is_rejected() {
        let raw = signed_envelope("wx000000", "whatever", NONCE, TIMESTAMP);

        let (status, body) = send(
            guarded(),
            rpc_request(Some(&raw), Some(&page_frame("wx000000"))),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["message"], "client not found");
    }

    #[tokio::test]
    async fn test_unknown_client_and_mismatch_are_distinguishable() {
        let mismatch = envelope(NONCE, TIMESTAMP, "invalid-signature");
        let (_, mismatch_body) = send(
            guarded(),
            rpc_request(Some(&mismatch), Some(&page_frame(ALICE_ID))),
        )
        .await;

        let (_, unknown_body) = send(
            guarded(),
            rpc_request(Some(&mismatch), Some(&page_frame("wx000000"))),
        )
        .await;

        assert_ne!(
            mismatch_body["error"]["message"],
            unknown_body["error"]["message"]
        );
    }

    #[tokio::test]
    async fn test_guard_applies_to_every_route() {
        let raw = envelope(NONCE, TIMESTAMP, "invalid-signature");
        let request = axum::http::Request::builder()
            .uri("/health")
            .header("X-WECHAT-HOSTSIGN", raw)
            .header("referrer", page_frame(ALICE_ID))
            .body(axum::body::Body::empty())
            .unwrap();

        let (status, _) = send(guarded(), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_concurrent_requests_through_shared_router() {
        let router = guarded();
        let mut handles = Vec::new();

        for i in 0..32 {
            let router = router.clone();
            handles.push(tokio::spawn(async move {
                let nonce = format!("nonce-{i}");
                let raw = if i % 2 == 0 {
                    signed_envelope(ALICE_ID, ALICE_TOKEN, &nonce, TIMESTAMP)
                } else {
                    envelope(&nonce, TIMESTAMP, "invalid-signature")
                };
                let (status, _) =
                    send(router, rpc_request(Some(&raw), Some(&page_frame(ALICE_ID)))).await;
                (i, status)
            }));
        }

        for handle in handles {
            let (i, status) = handle.await.unwrap();
            let expected = if i % 2 == 0 {
                StatusCode::OK
            } else {
                StatusCode::UNAUTHORIZED
            };
            assert_eq!(status, expected, "request {i}");
        }
    }
}
