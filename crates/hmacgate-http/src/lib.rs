//! Signature-verifying HTTP service layer for HmacGate.
//!
//! This crate wraps an inner handler behind `x-signature` verification:
//!
//! - **Buffering**: Reads the request body once and shares it between the
//!   verifier and the handler
//! - **Handler trait**: Defines the boundary between verification and
//!   business logic
//! - **Service**: Hyper `Service` implementation running the check
//! - **Response helpers**: Generic plain-text responses that never reveal
//!   signatures
//! - **Server**: Accept loop with graceful shutdown

pub mod buffered;
pub mod handler;
pub mod response;
pub mod server;
pub mod service;

#[cfg(test)]
mod test_support;

pub use buffered::BufferedBody;
pub use handler::{SignedHandler, ValidHandler};
pub use response::GateResponseBody;
pub use server::serve;
pub use service::SignatureAuthService;
