//! Signature token derivation.
//!
//! ```text
//! digest = HMAC-SHA512(secret_key, payload)       64 raw bytes
//! hex    = lowercase hex of digest                128 ASCII chars
//! token  = Base64(hex as UTF-8 bytes)             172 chars, padded
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha512;
use subtle::ConstantTimeEq;

type HmacSha512 = Hmac<Sha512>;

/// Length of every token produced by [`sign`].
pub const TOKEN_LEN: usize = 172;

/// Derive the signature token for `payload` under `secret_key`.
///
/// Total for any input; an empty key is a valid HMAC key and is not
/// special-cased.
///
/// # Examples
///
/// ```
/// use hmacgate_auth::codec::{TOKEN_LEN, sign};
///
/// let token = sign(b"hello", b"secret");
/// assert_eq!(token.len(), TOKEN_LEN);
/// assert_eq!(token, sign(b"hello", b"secret"));
/// ```
#[must_use]
pub fn sign(payload: &[u8], secret_key: &[u8]) -> String {
    let mut mac =
        HmacSha512::new_from_slice(secret_key).expect("HMAC can accept any key length");
    mac.update(payload);
    let hex_digest = hex::encode(mac.finalize().into_bytes());
    BASE64.encode(hex_digest.as_bytes())
}

/// Check `claimed` against the token for `payload` in constant time.
#[must_use]
pub fn verify(payload: &[u8], secret_key: &[u8], claimed: &[u8]) -> bool {
    let expected = sign(payload, secret_key);
    expected.as_bytes().ct_eq(claimed).into()
}
