//! # Signature Verification Service
//!
//! Application service layer that implements the `HostSignVerificationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`HostSignVerificationApi`)
//! - Uses the outbound ports (`ClientDirectory`, `DiagnosticSink`)
//! - Delegates parsing and hashing to the domain layer
//!
//! ## Flow
//!
//! ```text
//! Decode envelope ──→ Extract identity ──→ Lookup client ──→ Compute ──→ Compare
//!       │                    │                   │                          │
//!     Skip            Reject (referrer)   Reject (unknown)        Accept / Reject (mismatch)
//! ```

use crate::domain::diagnostics::DiagnosticEvent;
use crate::domain::entities::{
    ClientIdentity, HeaderSource, RejectReason, SkipReason, VerificationOutcome,
};
use crate::domain::envelope::SignatureEnvelope;
use crate::domain::errors::DirectoryError;
use crate::domain::referrer;
use crate::domain::signature;
use crate::ports::inbound::HostSignVerificationApi;
use crate::ports::outbound::{ClientDirectory, DiagnosticSink};
use crate::{HOSTSIGN_HEADER, REFERER_ALIAS_HEADER, REFERRER_HEADER};
use async_trait::async_trait;

/// Tunables for the verifier.
#[derive(Clone, Debug)]
pub struct VerifierOptions {
    /// Fall back to the standard `referer` spelling when `referrer` is absent
    pub accept_referer_alias: bool,
}

impl Default for VerifierOptions {
    fn default() -> Self {
        Self {
            accept_referer_alias: true,
        }
    }
}

/// Host signature verifier.
///
/// Holds only its collaborators; every call is independent, so one instance
/// can be shared across request tasks behind an `Arc`.
pub struct SignatureVerifier<D: ClientDirectory, S: DiagnosticSink> {
    directory: D,
    sink: S,
    options: VerifierOptions,
}

impl<D: ClientDirectory, S: DiagnosticSink> SignatureVerifier<D, S> {
    /// Create a new verifier.
    ///
    /// # Arguments
    /// * `directory` - Lookup of client identity to shared secret
    /// * `sink` - Receiver of diagnostics
    pub fn new(directory: D, sink: S) -> Self {
        Self::with_options(directory, sink, VerifierOptions::default())
    }

    pub fn with_options(directory: D, sink: S, options: VerifierOptions) -> Self {
        Self {
            directory,
            sink,
            options,
        }
    }

    /// Take the claimed identity from the referrer header.
    fn claimed_identity(&self, request: &dyn HeaderSource) -> Result<ClientIdentity, RejectReason> {
        let referrer = request.header(REFERRER_HEADER).or_else(|| {
            self.options
                .accept_referer_alias
                .then(|| request.header(REFERER_ALIAS_HEADER))
                .flatten()
        });

        let Some(referrer) = referrer else {
            self.sink.emit(&DiagnosticEvent::ReferrerAbsent);
            return Err(RejectReason::MissingReferrer);
        };

        referrer::extract_identity(&referrer).ok_or_else(|| {
            self.sink.emit(&DiagnosticEvent::ReferrerUnrecognized {
                referrer: referrer.into_owned(),
            });
            RejectReason::UnrecognizedReferrer
        })
    }
}

#[async_trait]
impl<D: ClientDirectory, S: DiagnosticSink> HostSignVerificationApi for SignatureVerifier<D, S> {
    async fn verify(
        &self,
        request: &dyn HeaderSource,
    ) -> Result<VerificationOutcome, DirectoryError> {
        // 1. No envelope: not plugin traffic
        let Some(raw) = request.header(HOSTSIGN_HEADER) else {
            self.sink.emit(&DiagnosticEvent::EnvelopeAbsent);
            return Ok(VerificationOutcome::Skip(SkipReason::MissingEnvelope));
        };

        // 2. Strict envelope schema
        let envelope = match SignatureEnvelope::decode(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                self.sink.emit(&DiagnosticEvent::EnvelopeMalformed {
                    raw: raw.into_owned(),
                    error: e.to_string(),
                });
                return Ok(VerificationOutcome::Skip(SkipReason::MalformedEnvelope));
            }
        };

        // 3-4. Identity from referrer
        let identity = match self.claimed_identity(request) {
            Ok(identity) => identity,
            Err(reason) => return Ok(VerificationOutcome::Reject(reason)),
        };

        // 5. Directory lookup, the only suspension point
        let Some(record) = self.directory.find_by_identity(&identity).await? else {
            self.sink.emit(&DiagnosticEvent::ClientUnknown { identity });
            return Ok(VerificationOutcome::Reject(RejectReason::UnknownClient));
        };

        // 6. Expected signature from the record, not from the claim
        let signing_string = signature::signing_string(
            record.identity.as_str(),
            &envelope.nonce,
            &envelope.timestamp,
            record.shared_secret.expose(),
        );
        let computed = signature::digest_signing_string(&signing_string);

        // 7. Constant-time comparison
        let matched = signature::signatures_match(&computed, &envelope.signature);

        // 8. Audit record for the internal sink only
        self.sink.emit(&DiagnosticEvent::SignatureComputed {
            identity: record.identity.clone(),
            signing_string,
            computed,
            supplied: envelope.signature,
        });

        if matched {
            self.sink.emit(&DiagnosticEvent::SignatureAccepted {
                identity: record.identity.clone(),
            });
            Ok(VerificationOutcome::Accept(record.identity.clone()))
        } else {
            self.sink.emit(&DiagnosticEvent::SignatureMismatch {
                identity: record.identity.clone(),
            });
            Ok(VerificationOutcome::Reject(RejectReason::SignatureMismatch))
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
