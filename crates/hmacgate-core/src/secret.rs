//! The shared signing secret.

use std::fmt;

/// Opaque shared secret used as the HMAC key.
///
/// The key is held for the lifetime of the process. Its `Debug` output is
/// redacted so the value cannot leak through logs or panic messages.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Create a secret key from raw bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether the key is empty.
    ///
    /// An empty key is a valid HMAC key, but almost never intended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("SecretKey(<empty>)")
        } else {
            f.write_str("SecretKey(<redacted>)")
        }
    }
}

impl From<&str> for SecretKey {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<String> for SecretKey {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}
