//! # Verification Errors
//!
//! Error types for host signature verification.

use thiserror::Error;

/// Reasons a signature envelope header could not be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The header value is not valid JSON
    #[error("envelope is not valid JSON: {0}")]
    InvalidJson(String),

    /// The header decoded to JSON but not to a JSON object
    #[error("envelope is not a JSON object")]
    NotAnObject,

    /// A required field is absent
    #[error("envelope field `{0}` is missing")]
    MissingField(&'static str),

    /// A required field is present but not a JSON string
    #[error("envelope field `{0}` must be a string")]
    NotAString(&'static str),

    /// The envelope carries a field outside the fixed schema
    #[error("envelope field `{0}` is not recognized")]
    UnknownField(String),
}

/// Failure reported by a `ClientDirectory` implementation.
///
/// A missing record is not an error; lookups return `Ok(None)` for it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The backing store could not be reached
    #[error("client directory unavailable: {0}")]
    Unavailable(String),
}

/// Failures that must interrupt request processing.
///
/// Only the outcomes that claim to be plugin traffic and then fail
/// verification end up here; everything else resolves locally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostSignError {
    /// The identity taken from the referrer has no client record
    #[error("client not found")]
    ClientNotFound,

    /// The supplied signature does not match the recomputed one
    #[error("invalid request, check plugin configuration")]
    InvalidRequest,

    /// The client directory failed; the request cannot be judged
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl HostSignError {
    /// Whether this failure is an authentication verdict rather than an
    /// infrastructure fault.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::ClientNotFound | Self::InvalidRequest)
    }
}
