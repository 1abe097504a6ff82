//! Error types for the HmacGate core.

/// Core error type for configuration and payload handling.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// An environment value could not be interpreted.
    #[error("invalid value for {name}: {value}")]
    InvalidSetting {
        /// Name of the offending variable.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The signing secret is empty while `REQUIRE_SECRET` is enabled.
    #[error("SECRET_SIGNATURE is empty but REQUIRE_SECRET is enabled")]
    MissingSecret,

    /// Unknown canonicalization mode name.
    #[error("unknown canonicalization mode: {0} (expected `raw` or `fields`)")]
    UnknownCanonicalization(String),

    /// Payload could not be encoded to or decoded from JSON.
    #[error("payload JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for core operations.
pub type GateResult<T> = Result<T, GateError>;
