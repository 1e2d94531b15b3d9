//! HostSign Gateway - HTTP surface for host signature verification.
//!
//! Wraps the verifier from `hostsign-verification` in a tower layer so any
//! axum router can reject forged plugin requests before its handlers run.
//!
//! # Usage
//!
//! ```ignore
//! use hostsign_gateway::{HostSignConfig, HostSignLayer, VerifiedClient};
//! use hostsign_verification::InMemoryClientDirectory;
//!
//! let config = HostSignConfig::from_env();
//! config.validate()?;
//! hostsign_gateway::telemetry::init_tracing(&config.telemetry)?;
//!
//! let app = Router::new()
//!     .route("/rpc", post(handler))
//!     .layer(HostSignLayer::from_config(&config, directory));
//! ```
//!
//! # Failure mapping
//!
//! | Outcome | HTTP | JSON-RPC code |
//! |---------|------|---------------|
//! | client not found | 401 | -32010 |
//! | signature mismatch | 401 | -32010 |
//! | directory failure | 503 | -32002 |
//! | anything else | passed through | - |

pub mod domain;
pub mod middleware;
pub mod telemetry;

pub use domain::{codes, ApiError, ConfigError, GatewayError, HostSignConfig, TelemetryConfig};
pub use middleware::{HostSignLayer, HostSignService, VerifiedClient};
pub use telemetry::{init_tracing, TelemetryError};
