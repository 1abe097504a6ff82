//! Error types for request authentication.
//!
//! The `Display` strings are meant for logs. Response bodies sent to callers
//! are fixed strings chosen by the HTTP layer and never include signatures.

/// Errors that can occur while authenticating a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The `x-signature` header is absent or empty.
    #[error("missing signature header")]
    MissingSignature,

    /// The claimed signature does not match the expected one.
    #[error("signature does not match")]
    InvalidSignature,

    /// The body could not be parsed for field-joined canonicalization.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The request body could not be read.
    #[error("failed to read request body: {0}")]
    BodyRead(String),
}

impl AuthError {
    /// HTTP status code reported to the caller for this error.
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        match self {
            Self::MissingSignature | Self::InvalidSignature | Self::MalformedPayload(_) => {
                http::StatusCode::FORBIDDEN
            }
            Self::BodyRead(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
