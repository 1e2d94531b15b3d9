//! # Test Fixtures
//!
//! Registered clients, envelope builders and a small router guarded by the
//! host signature layer.

use axum::body::Body;
use axum::extract::Extension;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use hostsign_gateway::{HostSignLayer, VerifiedClient};
use hostsign_verification::{compute_signature, ClientRecord, InMemoryClientDirectory};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const ALICE_ID: &str = "wx123456";
pub const ALICE_TOKEN: &str = "plugin-token";
pub const BOB_ID: &str = "wx654321";
pub const BOB_TOKEN: &str = "bob-secret-token";

pub const NONCE: &str = "test-nonce";
pub const TIMESTAMP: &str = "1234567890";

/// Directory with two registered clients.
pub fn directory() -> InMemoryClientDirectory {
    InMemoryClientDirectory::from_records(vec![
        ClientRecord::new(ALICE_ID, ALICE_TOKEN),
        ClientRecord::new(BOB_ID, BOB_TOKEN),
    ])
}

pub fn page_frame(identity: &str) -> String {
    format!("https://servicewechat.com/{identity}/1/page-frame.html")
}

pub fn envelope(nonce: &str, timestamp: &str, signature: &str) -> String {
    json!({
        "noncestr": nonce,
        "timestamp": timestamp,
        "signature": signature,
    })
    .to_string()
}

/// Envelope signed the way the host signs it.
pub fn signed_envelope(identity: &str, secret: &str, nonce: &str, timestamp: &str) -> String {
    envelope(
        nonce,
        timestamp,
        &compute_signature(identity, nonce, timestamp, secret),
    )
}

/// Router with a JSON-RPC endpoint that echoes the verified client.
pub fn app(layer: HostSignLayer) -> Router {
    Router::new()
        .route("/rpc", post(rpc))
        .route("/health", get(|| async { "ok" }))
        .layer(layer)
}

async fn rpc(client: Option<Extension<VerifiedClient>>) -> Json<Value> {
    let client = client.map(|Extension(VerifiedClient(identity))| identity.to_string());
    Json(json!({
        "jsonrpc": "2.0",
        "result": { "client": client },
        "id": 1
    }))
}

/// Request builder for `/rpc` with optional plugin headers.
pub fn rpc_request(hostsign: Option<&str>, referrer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/rpc");
    if let Some(value) = hostsign {
        builder = builder.header("X-WECHAT-HOSTSIGN", value);
    }
    if let Some(value) = referrer {
        builder = builder.header("referrer", value);
    }
    builder
        .body(Body::from(r#"{"jsonrpc":"2.0","method":"ping","id":1}"#))
        .expect("valid request")
}

/// Send a request through the router and decode the JSON body.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("infallible router");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
