//! Plain-text response helpers.
//!
//! Error bodies are fixed strings. Nothing derived from the request, the
//! secret or either signature ever reaches a response.

use bytes::Bytes;
use http_body_util::Full;

use hmacgate_auth::AuthError;

/// Body of every response the service produces. All of them are small and
/// fully buffered.
pub type GateResponseBody = Full<Bytes>;

/// Content type for every response this service produces.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Body sent with every `403 Forbidden`.
pub const INVALID_SIGNATURE_BODY: &str = "Invalid Signature\n";

/// Body sent with every `500 Internal Server Error`.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error\n";

/// Build a plain-text response with a static body.
#[must_use]
pub fn text_response(
    status: http::StatusCode,
    body: &'static str,
) -> http::Response<GateResponseBody> {
    http::Response::builder()
        .status(status)
        .header(http::header::CONTENT_TYPE, TEXT_CONTENT_TYPE)
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .expect("static text response should be valid")
}

/// Convert an [`AuthError`] into its generic HTTP response.
#[must_use]
pub fn error_to_response(error: &AuthError) -> http::Response<GateResponseBody> {
    let status = error.status_code();
    let body = if status == http::StatusCode::FORBIDDEN {
        INVALID_SIGNATURE_BODY
    } else {
        INTERNAL_ERROR_BODY
    };

    let mut response = text_response(status, body);
    response.headers_mut().insert(
        http::header::X_CONTENT_TYPE_OPTIONS,
        http::HeaderValue::from_static("nosniff"),
    );
    response
}
