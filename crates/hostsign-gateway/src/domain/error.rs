//! Gateway error types with JSON-RPC 2.0 error codes.
//!
//! Plugin traffic arrives as JSON-RPC calls, so verification failures are
//! reported as JSON-RPC error objects with a matching HTTP status.

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use hostsign_verification::HostSignError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-RPC 2.0 error codes used by the gateway
pub mod codes {
    pub const RESOURCE_UNAVAILABLE: i32 = -32002;
    pub const UNAUTHORIZED: i32 = -32010;
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// JSON-RPC error code
    pub code: i32,
    /// Error message
    pub message: String,
    /// Optional additional data
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Authentication failed
    pub fn unauthorized(details: impl Into<String>) -> Self {
        Self::new(codes::UNAUTHORIZED, details)
    }

    /// Downstream dependency unavailable
    pub fn unavailable(details: impl Into<String>) -> Self {
        Self::new(codes::RESOURCE_UNAVAILABLE, details)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Failure that stops a request at the gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Host signature verification failed
    #[error(transparent)]
    HostSign(#[from] HostSignError),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::HostSign(err) if err.is_authentication_failure() => StatusCode::UNAUTHORIZED,
            Self::HostSign(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// The JSON-RPC error object returned to the caller.
    ///
    /// Infrastructure failures are reported without their internal detail.
    pub fn api_error(&self) -> ApiError {
        match self {
            Self::HostSign(err) if err.is_authentication_failure() => {
                ApiError::unauthorized(err.to_string())
            }
            Self::HostSign(_) => ApiError::unavailable("client directory unavailable"),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "error": self.api_error(),
            "id": null
        });

        let mut response = Response::new(Body::from(serde_json::to_vec(&body).unwrap_or_default()));
        *response.status_mut() = self.status();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        response
    }
}
