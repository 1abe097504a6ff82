//! HMAC-SHA512 request signing and verification for HmacGate.
//!
//! A request is authenticated by a token carried in the `x-signature` header:
//!
//! ```text
//! token = Base64(Hex(HMAC-SHA512(secret, canonical_body)))
//! ```
//!
//! Base64 is applied over the lowercase hex text of the digest, not over the
//! raw digest bytes. Peers rely on this exact encoding.
//!
//! # Usage
//!
//! ```rust
//! use hmacgate_auth::{authenticate, sign_body, SIGNATURE_HEADER};
//! use hmacgate_core::SigningConfig;
//!
//! let config = SigningConfig::new("rahasia");
//! let body = br#"{"transaction_datetime":"2024-08-15T14:00:00Z","customer_name":"John Doe","request_id":"123456789"}"#;
//!
//! let token = sign_body(body, &config).unwrap();
//!
//! let mut headers = http::HeaderMap::new();
//! headers.insert(SIGNATURE_HEADER, token.parse().unwrap());
//! assert!(authenticate(&headers, body, &config).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Turning a request body into the bytes that get signed
//! - [`codec`] - The signature token derivation itself
//! - [`error`] - Authentication error types
//! - [`verify`] - Header extraction and the allow/reject decision

pub mod canonical;
pub mod codec;
pub mod error;
pub mod verify;

pub use canonical::canonicalize;
pub use codec::{TOKEN_LEN, sign};
pub use error::AuthError;
pub use verify::{SIGNATURE_HEADER, authenticate, claimed_signature, sign_body};
