//! Client error types.

use hmacgate_auth::AuthError;
use hmacgate_core::GateError;

/// Errors raised while signing or sending a payload.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The payload could not be serialized.
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] GateError),

    /// The serialized payload could not be canonicalized for signing.
    #[error("failed to canonicalize payload: {0}")]
    Canonicalize(#[from] AuthError),

    /// The endpoint is not a valid absolute URL.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint {
        /// The endpoint as configured.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request could not be delivered or the response not read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
