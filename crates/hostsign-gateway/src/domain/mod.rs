//! Gateway domain: configuration and error types.

pub mod config;
pub mod error;

pub use config::{ConfigError, HostSignConfig, TelemetryConfig};
pub use error::{codes, ApiError, GatewayError};
