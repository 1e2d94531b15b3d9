//! # Diagnostic Events
//!
//! Structured records emitted during verification. They go to an internal
//! observability sink and are never returned to the caller.

use super::entities::ClientIdentity;
use zeroize::Zeroizing;

/// Severity attached to every diagnostic event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Warning,
}

/// A single verification diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Request carried no signature envelope
    EnvelopeAbsent,

    /// Envelope header present but rejected by the schema
    EnvelopeMalformed { raw: String, error: String },

    /// Envelope present but no referrer header
    ReferrerAbsent,

    /// Referrer does not carry a page-frame URL
    ReferrerUnrecognized { referrer: String },

    /// Directory has no record for the claimed identity
    ClientUnknown { identity: ClientIdentity },

    /// Expected signature computed for a known client.
    ///
    /// `signing_string` contains the shared secret.
    SignatureComputed {
        identity: ClientIdentity,
        signing_string: Zeroizing<String>,
        computed: String,
        supplied: String,
    },

    /// Supplied signature differs from the computed one
    SignatureMismatch { identity: ClientIdentity },

    /// Signature verified
    SignatureAccepted { identity: ClientIdentity },
}

impl DiagnosticEvent {
    pub fn severity(&self) -> Severity {
        match self {
            Self::EnvelopeAbsent | Self::SignatureComputed { .. } | Self::SignatureAccepted { .. } => {
                Severity::Debug
            }
            Self::EnvelopeMalformed { .. }
            | Self::ReferrerAbsent
            | Self::ReferrerUnrecognized { .. }
            | Self::ClientUnknown { .. }
            | Self::SignatureMismatch { .. } => Severity::Warning,
        }
    }

    /// Stable event name for log fields and assertions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnvelopeAbsent => "envelope_absent",
            Self::EnvelopeMalformed { .. } => "envelope_malformed",
            Self::ReferrerAbsent => "referrer_absent",
            Self::ReferrerUnrecognized { .. } => "referrer_unrecognized",
            Self::ClientUnknown { .. } => "client_unknown",
            Self::SignatureComputed { .. } => "signature_computed",
            Self::SignatureMismatch { .. } => "signature_mismatch",
            Self::SignatureAccepted { .. } => "signature_accepted",
        }
    }
}
