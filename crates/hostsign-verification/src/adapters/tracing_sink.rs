//! # Tracing Diagnostic Sink
//!
//! Forwards verification diagnostics to `tracing` under the `hostsign` target.
//!
//! The signing string embeds the client's shared secret. It is only written
//! out when the sink is built with `expose_signing_material`; otherwise the
//! log line carries its length.

use crate::domain::diagnostics::{DiagnosticEvent, Severity};
use crate::ports::outbound::DiagnosticSink;
use tracing::{debug, warn};

#[derive(Clone, Debug, Default)]
pub struct TracingDiagnosticSink {
    expose_signing_material: bool,
}

impl TracingDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log signing strings verbatim. Debugging aid only.
    pub fn with_signing_material(expose: bool) -> Self {
        Self {
            expose_signing_material: expose,
        }
    }

    fn render_signing_string(&self, signing_string: &str) -> String {
        if self.expose_signing_material {
            signing_string.to_string()
        } else {
            format!("<redacted {} bytes>", signing_string.len())
        }
    }
}

/// Log at the level matching an event's severity.
macro_rules! log_at {
    ($severity:expr, $($arg:tt)+) => {
        match $severity {
            Severity::Debug => debug!(target: "hostsign", $($arg)+),
            Severity::Warning => warn!(target: "hostsign", $($arg)+),
        }
    };
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn emit(&self, event: &DiagnosticEvent) {
        let name = event.name();
        let severity = event.severity();
        match event {
            DiagnosticEvent::EnvelopeAbsent => {
                log_at!(severity, event = name, "No host signature header, not plugin traffic");
            }
            DiagnosticEvent::EnvelopeMalformed { raw, error } => {
                log_at!(severity, event = name, host_sign = %raw, error = %error, "Host signature envelope is malformed");
            }
            DiagnosticEvent::ReferrerAbsent => {
                log_at!(severity, event = name, "Host signature present but referrer missing");
            }
            DiagnosticEvent::ReferrerUnrecognized { referrer } => {
                log_at!(severity, event = name, referrer = %referrer, "Host signature present but referrer carries no client identity");
            }
            DiagnosticEvent::ClientUnknown { identity } => {
                log_at!(severity, event = name, identity = %identity, "No client registered for identity");
            }
            DiagnosticEvent::SignatureComputed {
                identity,
                signing_string,
                computed,
                supplied,
            } => {
                log_at!(
                    severity,
                    event = name,
                    identity = %identity,
                    signing_string = %self.render_signing_string(signing_string),
                    server_sign = %computed,
                    request_sign = %supplied,
                    "Computed host signature"
                );
            }
            DiagnosticEvent::SignatureMismatch { identity } => {
                log_at!(severity, event = name, identity = %identity, "Host signature mismatch");
            }
            DiagnosticEvent::SignatureAccepted { identity } => {
                log_at!(severity, event = name, identity = %identity, "Host signature verified");
            }
        }
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDiagnosticSink;

impl DiagnosticSink for NullDiagnosticSink {
    fn emit(&self, _event: &DiagnosticEvent) {}
}
