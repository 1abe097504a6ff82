//! Core types and configuration for HmacGate.
//!
//! This crate provides the building blocks shared by the verifying server and
//! the signing client: the request [`Payload`], the shared [`SecretKey`], the
//! [`Canonicalization`] mode both sides agree on, and the configuration
//! structs loaded once at startup. [`init_tracing`] installs the log
//! subscriber both binaries use.

mod config;
mod error;
mod secret;
mod telemetry;
mod types;

pub use config::{ClientConfig, ServerConfig, SigningConfig};
pub use error::{GateError, GateResult};
pub use secret::SecretKey;
pub use telemetry::init_tracing;
pub use types::{Canonicalization, Payload};
