//! Signature-verifying HTTP service implementing the hyper `Service` trait.
//!
//! [`SignatureAuthService`] gates an inner [`SignedHandler`]:
//!
//! 1. Reject early if the `x-signature` header is absent or empty
//! 2. Buffer the request body once
//! 3. Verify the signature over the buffered bytes
//! 4. Forward the request, body intact, to the handler
//! 5. Tag the response with an `x-request-id`

use std::convert::Infallible;
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use hyper::service::Service;
use tracing::{debug, error, warn};
use uuid::Uuid;

use hmacgate_auth::{AuthError, authenticate, claimed_signature};
use hmacgate_core::SigningConfig;

use crate::buffered::BufferedBody;
use crate::handler::SignedHandler;
use crate::response::{GateResponseBody, error_to_response};

/// Header carrying the per-request identifier on every response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Hyper `Service` that verifies request signatures before calling `H`.
///
/// Cloning is cheap: the handler and the signing configuration are shared
/// read-only behind `Arc`s, so one instance can serve concurrent connections.
#[derive(Debug)]
pub struct SignatureAuthService<H: SignedHandler> {
    handler: Arc<H>,
    config: Arc<SigningConfig>,
}

impl<H: SignedHandler> SignatureAuthService<H> {
    /// Create a new `SignatureAuthService`.
    pub fn new(handler: Arc<H>, config: Arc<SigningConfig>) -> Self {
        Self { handler, config }
    }

    /// The signing configuration requests are verified against.
    #[must_use]
    pub fn config(&self) -> &SigningConfig {
        &self.config
    }
}

impl<H: SignedHandler> Clone for SignatureAuthService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H, B> Service<http::Request<B>> for SignatureAuthService<H>
where
    H: SignedHandler,
    B: http_body::Body + Send + 'static,
    B::Data: Send,
    B::Error: Display + Send,
{
    type Response = http::Response<GateResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<B>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let config = Arc::clone(&self.config);
        let request_id = Uuid::new_v4().to_string();

        Box::pin(async move {
            let response = process_request(req, handler.as_ref(), &config, &request_id).await;
            Ok(add_common_headers(response, &request_id))
        })
    }
}

/// Run one request through verification and, if allowed, the handler.
async fn process_request<H, B>(
    req: http::Request<B>,
    handler: &H,
    config: &SigningConfig,
    request_id: &str,
) -> http::Response<GateResponseBody>
where
    H: SignedHandler,
    B: http_body::Body,
    B::Error: Display,
{
    let (parts, body) = req.into_parts();
    debug!(method = %parts.method, uri = %parts.uri, request_id, "processing request");

    // 1. Header presence, before touching the body.
    if let Err(err) = claimed_signature(&parts.headers) {
        warn!(kind = rejection_kind(&err), request_id, "rejecting request");
        return error_to_response(&err);
    }

    // 2. Buffer the body once.
    let buffered = match BufferedBody::collect(body).await {
        Ok(buffered) => buffered,
        Err(err) => {
            error!(error = %err, request_id, "failed to read request body");
            return error_to_response(&err);
        }
    };

    // 3. Verify.
    if let Err(err) = authenticate(&parts.headers, buffered.verification_view(), config) {
        warn!(kind = rejection_kind(&err), request_id, "rejecting request");
        return error_to_response(&err);
    }

    debug!(body_len = buffered.len(), request_id, "signature verified");

    // 4. Forward with the original body.
    let req = http::Request::from_parts(parts, buffered.forwarded_view());
    handler.handle(req).await
}

/// Add headers common to every response.
fn add_common_headers(
    mut response: http::Response<GateResponseBody>,
    request_id: &str,
) -> http::Response<GateResponseBody> {
    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        response.headers_mut().entry(REQUEST_ID_HEADER).or_insert(hv);
    }
    response
}

/// Short label for an [`AuthError`], used as a log field.
#[must_use]
pub fn rejection_kind(error: &AuthError) -> &'static str {
    match error {
        AuthError::MissingSignature => "missing_signature",
        AuthError::InvalidSignature | AuthError::MalformedPayload(_) => "invalid_signature",
        AuthError::BodyRead(_) => "body_read",
    }
}
