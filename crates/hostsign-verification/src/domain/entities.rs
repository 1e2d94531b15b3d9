//! # Domain Entities
//!
//! Core data structures for host signature verification.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// Request View
// =============================================================================

/// Read-only view over the headers of an incoming request.
///
/// Header names are matched case-insensitively. The verifier only borrows
/// the request for the duration of one check.
pub trait HeaderSource: Sync {
    /// Value of the named header, if present.
    fn header(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl HeaderSource for http::HeaderMap {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        // Non-UTF-8 bytes never match the envelope schema or the referrer
        // pattern, so lossy decoding only affects what ends up in diagnostics.
        self.get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
    }
}

/// An exact key wins. Among keys that differ only in case, the smallest key
/// in byte order wins, so lookups never depend on map iteration order.
impl HeaderSource for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match self.get(name) {
            Some(value) => value,
            None => self
                .iter()
                .filter(|(key, _)| key.eq_ignore_ascii_case(name))
                .min_by(|(a, _), (b, _)| a.cmp(b))
                .map(|(_, value)| value)?,
        };
        Some(Cow::Borrowed(value.as_str()))
    }
}

// =============================================================================
// Client Types
// =============================================================================

/// Public identifier of a registered client, as claimed by the referrer.
///
/// Any string is representable. Identities taken from requests go through
/// [`extract_identity`](crate::domain::referrer::extract_identity), which
/// never yields an empty one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientIdentity {
    fn from(identity: &str) -> Self {
        Self::new(identity)
    }
}

/// Per-client secret used as keying material for host signatures.
///
/// Cleared from memory on drop. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Borrow the raw secret. Only the signature computation should need this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

/// Client record owned by the external directory.
///
/// The verifier reads exactly one record per check and never mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClientRecord {
    /// Identity the record is registered under
    pub identity: ClientIdentity,
    /// Secret shared between the host and this service
    pub shared_secret: SharedSecret,
}

impl ClientRecord {
    pub fn new(identity: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            identity: ClientIdentity::new(identity),
            shared_secret: SharedSecret::new(shared_secret),
        }
    }
}

// =============================================================================
// Verification Outcome
// =============================================================================

/// Why a request was not subjected to verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No signature envelope header; not plugin traffic
    MissingEnvelope,
    /// Envelope header present but not a valid envelope
    MalformedEnvelope,
}

/// Why a request that carried an envelope failed verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// No referrer header to take the identity from
    MissingReferrer,
    /// Referrer does not match the page-frame URL pattern
    UnrecognizedReferrer,
    /// Directory has no record for the claimed identity
    UnknownClient,
    /// Recomputed signature differs from the supplied one
    SignatureMismatch,
}

impl RejectReason {
    /// Whether the caller must interrupt the request.
    ///
    /// Referrer problems mean the request is not recognizable plugin traffic
    /// and resolve locally. An unknown client or a bad signature means the
    /// request claims to be plugin traffic and is not trustworthy.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::UnknownClient | Self::SignatureMismatch)
    }
}

/// Result of verifying a single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Request does not require verification
    Skip(SkipReason),
    /// Signature verified for this client
    Accept(ClientIdentity),
    /// Verification failed
    Reject(RejectReason),
}

impl VerificationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accept(_))
    }

    /// Whether the outcome must interrupt request processing.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Reject(reason) => reason.is_fatal(),
            Self::Skip(_) | Self::Accept(_) => false,
        }
    }
}
