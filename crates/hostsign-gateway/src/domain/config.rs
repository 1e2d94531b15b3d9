//! Gateway configuration with validation.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HOSTSIGN_ENABLED` | `true` | Run verification at all |
//! | `HOSTSIGN_ACCEPT_REFERER_ALIAS` | `true` | Also read the `referer` header |
//! | `HOSTSIGN_EXPOSE_SIGNING_MATERIAL` | `false` | Log signing strings verbatim |
//! | `HOSTSIGN_SERVICE_NAME` | `hostsign` | Service name in log lines |
//! | `HOSTSIGN_LOG_LEVEL` or `RUST_LOG` | `info` | Log level filter |
//! | `HOSTSIGN_JSON_LOGS` | `false` | JSON formatted logs |
//! | `HOSTSIGN_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

use hostsign_verification::VerifierOptions;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Main gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSignConfig {
    /// Run host signature verification; when false every request passes
    pub enabled: bool,
    /// Fall back to the standard `referer` header spelling
    pub accept_referer_alias: bool,
    /// Log signing strings (which contain shared secrets) verbatim
    pub expose_signing_material: bool,
    /// Logging configuration
    pub telemetry: TelemetryConfig,
}

impl Default for HostSignConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            accept_referer_alias: true,
            expose_signing_material: false,
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl HostSignConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            enabled: flag(&lookup, "HOSTSIGN_ENABLED").unwrap_or(defaults.enabled),
            accept_referer_alias: flag(&lookup, "HOSTSIGN_ACCEPT_REFERER_ALIAS")
                .unwrap_or(defaults.accept_referer_alias),
            expose_signing_material: flag(&lookup, "HOSTSIGN_EXPOSE_SIGNING_MATERIAL")
                .unwrap_or(defaults.expose_signing_material),
            telemetry: TelemetryConfig::from_lookup(&lookup),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.telemetry.service_name.trim().is_empty() {
            return Err(ConfigError::InvalidTelemetry(
                "service_name cannot be empty".into(),
            ));
        }

        if self.telemetry.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidTelemetry(
                "log_level cannot be empty".into(),
            ));
        }

        // JSON logs mean a shipped log pipeline; secrets must not end up there
        if self.expose_signing_material && self.telemetry.json_logs {
            return Err(ConfigError::SigningMaterialInProduction);
        }

        Ok(())
    }

    /// Options handed to the verifier.
    pub fn verifier_options(&self) -> VerifierOptions {
        VerifierOptions {
            accept_referer_alias: self.accept_referer_alias,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name for log lines
    pub service_name: String,
    /// Log level filter (trace, debug, info, warn, error or a full directive)
    pub log_level: String,
    /// Whether to enable JSON formatted logs
    pub json_logs: bool,
    /// Whether to write logs to stdout
    pub console_output: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "hostsign".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            console_output: true,
        }
    }
}

impl TelemetryConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            service_name: lookup("HOSTSIGN_SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: lookup("HOSTSIGN_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            json_logs: flag(&lookup, "HOSTSIGN_JSON_LOGS").unwrap_or(defaults.json_logs),
            console_output: flag(&lookup, "HOSTSIGN_CONSOLE_OUTPUT")
                .unwrap_or(defaults.console_output),
        }
    }
}

/// Parse a boolean flag; unrecognized values fall back to the default.
fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid telemetry configuration: {0}")]
    InvalidTelemetry(String),

    #[error("Signing material must not be logged together with JSON logs")]
    SigningMaterialInProduction,
}
