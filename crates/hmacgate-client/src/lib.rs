//! Signing HTTP client for HmacGate.
//!
//! [`SigningClient`] serializes a [`Payload`](hmacgate_core::Payload), signs
//! the serialized bytes and posts them with the token in `x-signature`.

mod client;
mod error;

pub use client::{SignedPayload, SignedResponse, SigningClient};
pub use error::ClientError;
