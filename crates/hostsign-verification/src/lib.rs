//! # Host Signature Verification
//!
//! Verifies that a forwarded plugin request really originated from the host
//! application on behalf of a registered client.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Envelope decoding, referrer parsing and
//!   signature computation, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//! - **Adapters Layer** (`adapters/`): Concrete directory and diagnostic sinks
//!
//! ## Protocol
//!
//! ```text
//! X-WECHAT-HOSTSIGN: {"noncestr":"..","timestamp":"..","signature":".."}
//! referrer: https://servicewechat.com/{identity}/{version}/page-frame.html
//!
//! signature = hex(sha1(concat(sort([identity, noncestr, timestamp, secret]))))
//! ```
//!
//! ## Security Notes
//!
//! - Signatures are compared in constant time
//! - Shared secrets are zeroized on drop and never appear in `Debug` output
//! - The signing string contains the shared secret; sinks only log it when
//!   explicitly told to

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory::InMemoryClientDirectory;
pub use adapters::recording::RecordingDiagnosticSink;
pub use adapters::tracing_sink::{NullDiagnosticSink, TracingDiagnosticSink};
pub use domain::diagnostics::{DiagnosticEvent, Severity};
pub use domain::entities::{
    ClientIdentity, ClientRecord, HeaderSource, RejectReason, SharedSecret, SkipReason,
    VerificationOutcome,
};
pub use domain::envelope::SignatureEnvelope;
pub use domain::errors::{DirectoryError, EnvelopeError, HostSignError};
pub use domain::referrer::extract_identity;
pub use domain::signature::{compute_signature, signatures_match, signing_string};
pub use ports::inbound::HostSignVerificationApi;
pub use ports::outbound::{ClientDirectory, DiagnosticSink};
pub use service::{SignatureVerifier, VerifierOptions};

/// Header carrying the JSON signature envelope.
pub const HOSTSIGN_HEADER: &str = "x-wechat-hostsign";

/// Header carrying the page-frame URL the client identity is taken from.
pub const REFERRER_HEADER: &str = "referrer";

/// Standard HTTP spelling of the referrer header.
pub const REFERER_ALIAS_HEADER: &str = "referer";
