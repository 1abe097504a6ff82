//! Inner handler trait and the stock handler behind the signature check.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use crate::response::{GateResponseBody, text_response};

/// Body returned by [`ValidHandler`].
pub const VALID_BODY: &str = "Valid!";

/// Trait implemented by the handler that runs after a request is verified.
///
/// The handler receives the original request with its body already
/// buffered. The body bytes are the exact bytes the signature was checked
/// against and may be read any number of times.
pub trait SignedHandler: Send + Sync + 'static {
    /// Handle a verified request and produce an HTTP response.
    fn handle(
        &self,
        req: http::Request<Bytes>,
    ) -> Pin<Box<dyn Future<Output = http::Response<GateResponseBody>> + Send>>;
}

/// Handler that acknowledges every verified request with `200 Valid!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidHandler;

impl SignedHandler for ValidHandler {
    fn handle(
        &self,
        _req: http::Request<Bytes>,
    ) -> Pin<Box<dyn Future<Output = http::Response<GateResponseBody>> + Send>> {
        Box::pin(async { text_response(http::StatusCode::OK, VALID_BODY) })
    }
}
