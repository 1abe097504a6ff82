//! Request authentication decision.
//!
//! [`authenticate`] is the whole allow/reject decision for one request:
//!
//! 1. Take the claimed token from the `x-signature` header.
//! 2. Canonicalize the buffered body.
//! 3. Recompute the expected token with [`codec::sign`](crate::codec::sign).
//! 4. Compare both in constant time.
//!
//! Neither token is ever logged or returned.

use hmacgate_core::SigningConfig;
use tracing::debug;

use crate::canonical::canonicalize;
use crate::codec;
use crate::error::AuthError;

/// Header carrying the signature token.
pub const SIGNATURE_HEADER: &str = "x-signature";

/// Compute the token for a request body under `config`.
///
/// # Errors
///
/// Fails only in field-joined mode, when the body is not a payload object.
pub fn sign_body(body: &[u8], config: &SigningConfig) -> Result<String, AuthError> {
    let canonical = canonicalize(config.canonicalization, body)?;
    Ok(codec::sign(&canonical, config.secret.as_bytes()))
}

/// Decide whether a request with `headers` and `body` is authentic.
///
/// `Ok(())` allows the request. The header value is compared byte-wise, so a
/// value that is not valid text simply fails to match.
///
/// # Errors
///
/// - [`AuthError::MissingSignature`] if the header is absent or empty
/// - [`AuthError::InvalidSignature`] if the token does not match, or the body
///   cannot be canonicalized
pub fn authenticate(
    headers: &http::HeaderMap,
    body: &[u8],
    config: &SigningConfig,
) -> Result<(), AuthError> {
    let claimed = claimed_signature(headers)?;

    let canonical = match canonicalize(config.canonicalization, body) {
        Ok(canonical) => canonical,
        Err(err) => {
            debug!(error = %err, mode = %config.canonicalization, "cannot canonicalize body");
            return Err(AuthError::InvalidSignature);
        }
    };

    if codec::verify(&canonical, config.secret.as_bytes(), claimed) {
        debug!(body_len = body.len(), "signature verification succeeded");
        Ok(())
    } else {
        debug!(
            body_len = body.len(),
            claimed_len = claimed.len(),
            "signature mismatch"
        );
        Err(AuthError::InvalidSignature)
    }
}

/// Get the raw claimed token, treating an empty value as absent.
///
/// # Errors
///
/// Returns [`AuthError::MissingSignature`] if the header is absent or empty.
pub fn claimed_signature(headers: &http::HeaderMap) -> Result<&[u8], AuthError> {
    headers
        .get(SIGNATURE_HEADER)
        .map(http::HeaderValue::as_bytes)
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingSignature)
}
