//! Read-once request body buffering.

use std::fmt::Display;

use bytes::Bytes;
use http_body_util::BodyExt;

use hmacgate_auth::AuthError;

/// A request body read once into an owned buffer.
///
/// The buffer backs two independent views: [`verification_view`] for the
/// signature check and [`forwarded_view`] for the inner handler. Both refer
/// to the same bytes, so the handler sees exactly what was verified, and the
/// storage is released once the last view is dropped.
///
/// [`verification_view`]: BufferedBody::verification_view
/// [`forwarded_view`]: BufferedBody::forwarded_view
#[derive(Debug, Clone)]
pub struct BufferedBody {
    bytes: Bytes,
}

impl BufferedBody {
    /// Drain `body` completely into a buffer.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::BodyRead`] if the body stream fails.
    pub async fn collect<B>(body: B) -> Result<Self, AuthError>
    where
        B: http_body::Body,
        B::Error: Display,
    {
        let collected = body
            .collect()
            .await
            .map_err(|e| AuthError::BodyRead(e.to_string()))?;
        Ok(Self {
            bytes: collected.to_bytes(),
        })
    }

    /// The bytes the signature is checked against.
    #[must_use]
    pub fn verification_view(&self) -> &[u8] {
        &self.bytes
    }

    /// A cheap handle to the same bytes, for the inner handler.
    #[must_use]
    pub fn forwarded_view(&self) -> Bytes {
        self.bytes.clone()
    }

    /// Number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the body was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Bytes> for BufferedBody {
    fn from(bytes: Bytes) -> Self {
        Self { bytes }
    }
}
