//! Host signature middleware.
//!
//! Runs verification once per request before the inner service:
//! - verified requests carry a [`VerifiedClient`] extension
//! - requests that are not plugin traffic pass through untouched
//! - failed verifications are answered with a JSON-RPC error and never reach
//!   the inner service

use crate::domain::config::HostSignConfig;
use crate::domain::error::GatewayError;
use axum::{body::Body, http::Request, response::IntoResponse, response::Response};
use hostsign_verification::{
    ClientDirectory, ClientIdentity, HostSignVerificationApi, SignatureVerifier,
    TracingDiagnosticSink,
};
use std::sync::Arc;
use tower::{Layer, Service};
use tracing::{debug, warn};

/// Request extension set for requests whose host signature verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedClient(pub ClientIdentity);

/// Host signature layer
#[derive(Clone)]
pub struct HostSignLayer {
    verifier: Arc<dyn HostSignVerificationApi>,
    enabled: bool,
}

impl HostSignLayer {
    pub fn new(verifier: Arc<dyn HostSignVerificationApi>) -> Self {
        Self {
            verifier,
            enabled: true,
        }
    }

    /// Build the layer with a tracing-backed verifier configured from `config`.
    pub fn from_config<D>(config: &HostSignConfig, directory: D) -> Self
    where
        D: ClientDirectory + 'static,
    {
        let sink = TracingDiagnosticSink::with_signing_material(config.expose_signing_material);
        let verifier =
            SignatureVerifier::with_options(directory, sink, config.verifier_options());

        Self {
            verifier: Arc::new(verifier),
            enabled: config.enabled,
        }
    }
}

impl<S> Layer<S> for HostSignLayer {
    type Service = HostSignService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HostSignService {
            inner,
            verifier: Arc::clone(&self.verifier),
            enabled: self.enabled,
        }
    }
}

/// Host signature service
#[derive(Clone)]
pub struct HostSignService<S> {
    inner: S,
    verifier: Arc<dyn HostSignVerificationApi>,
    enabled: bool,
}

impl<S> Service<Request<Body>> for HostSignService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let verifier = Arc::clone(&self.verifier);
        let enabled = self.enabled;
        let mut inner = self.inner.clone();

        Box::pin(async move {
            if !enabled {
                return inner.call(req).await;
            }

            match verifier.check(req.headers()).await {
                Ok(Some(identity)) => {
                    debug!(identity = %identity, path = %req.uri().path(), "Plugin request verified");
                    req.extensions_mut().insert(VerifiedClient(identity));
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        error = %e,
                        path = %req.uri().path(),
                        "Plugin request rejected"
                    );
                    return Ok(GatewayError::from(e).into_response());
                }
            }

            inner.call(req).await
        })
    }
}
