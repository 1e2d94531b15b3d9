//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies this crate needs. Both are supplied by the
//! embedding application and must tolerate concurrent reads.

use crate::domain::diagnostics::DiagnosticEvent;
use crate::domain::entities::{ClientIdentity, ClientRecord};
use crate::domain::errors::DirectoryError;
use async_trait::async_trait;
use std::sync::Arc;

/// Lookup of registered clients by identity.
///
/// Registration, secret issuance and rotation happen outside this crate.
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Find the record registered under `identity`.
    ///
    /// # Errors
    /// * `DirectoryError::Unavailable` - The backing store could not be read
    ///
    /// An unregistered identity is `Ok(None)`, not an error.
    async fn find_by_identity(
        &self,
        identity: &ClientIdentity,
    ) -> Result<Option<ClientRecord>, DirectoryError>;
}

#[async_trait]
impl<D: ClientDirectory + ?Sized> ClientDirectory for Arc<D> {
    async fn find_by_identity(
        &self,
        identity: &ClientIdentity,
    ) -> Result<Option<ClientRecord>, DirectoryError> {
        (**self).find_by_identity(identity).await
    }
}

/// Receiver of verification diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, event: &DiagnosticEvent);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn emit(&self, event: &DiagnosticEvent) {
        (**self).emit(event)
    }
}
