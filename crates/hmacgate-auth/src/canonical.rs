//! Canonical form of a request body.
//!
//! In [`Canonicalization::RawBody`] mode the signed bytes are the body exactly
//! as transmitted, so two semantically equal JSON documents with different
//! whitespace or key order sign differently. [`Canonicalization::FieldJoined`]
//! signs `request_id:customer_name:transaction_datetime` instead.

use std::borrow::Cow;

use hmacgate_core::{Canonicalization, Payload};

use crate::error::AuthError;

/// Produce the bytes that get signed for `body` under `mode`.
///
/// # Errors
///
/// Returns [`AuthError::MalformedPayload`] in field-joined mode when the body
/// is not a JSON payload object.
pub fn canonicalize(mode: Canonicalization, body: &[u8]) -> Result<Cow<'_, [u8]>, AuthError> {
    match mode {
        Canonicalization::RawBody => Ok(Cow::Borrowed(body)),
        Canonicalization::FieldJoined => {
            let payload =
                Payload::from_slice(body).map_err(|e| AuthError::MalformedPayload(e.to_string()))?;
            Ok(Cow::Owned(payload.joined_fields().into_bytes()))
        }
    }
}
