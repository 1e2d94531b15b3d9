//! # Inbound Ports (Driving Ports / API)
//!
//! The API the request pipeline calls once per incoming request, before any
//! business logic runs.

use crate::domain::entities::{
    ClientIdentity, HeaderSource, RejectReason, VerificationOutcome,
};
use crate::domain::errors::{DirectoryError, HostSignError};
use async_trait::async_trait;

/// Host signature verification API.
///
/// Implementations must be thread-safe (`Send + Sync`) and keep no state
/// between calls.
#[async_trait]
pub trait HostSignVerificationApi: Send + Sync {
    /// Run the full verification and report the raw outcome.
    ///
    /// # Errors
    /// * `DirectoryError` - The client directory failed; no verdict was reached
    async fn verify(
        &self,
        request: &dyn HeaderSource,
    ) -> Result<VerificationOutcome, DirectoryError>;

    /// Verify and apply the propagation policy.
    ///
    /// Returns `Ok(Some(identity))` for a verified request and `Ok(None)` for
    /// requests that are not recognizable plugin traffic (no envelope, a
    /// malformed envelope, or a missing/unrecognized referrer).
    ///
    /// # Errors
    /// * `HostSignError::ClientNotFound` - Claimed identity is not registered
    /// * `HostSignError::InvalidRequest` - Signature mismatch
    /// * `HostSignError::Directory` - Directory failure
    async fn check(
        &self,
        request: &dyn HeaderSource,
    ) -> Result<Option<ClientIdentity>, HostSignError> {
        match self.verify(request).await? {
            VerificationOutcome::Accept(identity) => Ok(Some(identity)),
            VerificationOutcome::Skip(_) => Ok(None),
            VerificationOutcome::Reject(reason) if !reason.is_fatal() => Ok(None),
            VerificationOutcome::Reject(RejectReason::UnknownClient) => {
                Err(HostSignError::ClientNotFound)
            }
            VerificationOutcome::Reject(_) => Err(HostSignError::InvalidRequest),
        }
    }
}
