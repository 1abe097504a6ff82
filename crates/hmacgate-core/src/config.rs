//! Configuration management for HmacGate.
//!
//! All configuration is driven by environment variables and read once at
//! startup. The resulting structs are passed explicitly into the server and
//! client; nothing downstream consults the environment again.

use std::sync::Arc;

use crate::error::{GateError, GateResult};
use crate::secret::SecretKey;
use crate::types::Canonicalization;

/// Settings shared by the signing and verifying sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningConfig {
    /// Shared HMAC secret.
    pub secret: SecretKey,
    /// How request bodies are canonicalized before signing.
    pub canonicalization: Canonicalization,
}

impl SigningConfig {
    /// Create a signing config using raw-body canonicalization.
    pub fn new(secret: impl Into<SecretKey>) -> Self {
        Self {
            secret: secret.into(),
            canonicalization: Canonicalization::RawBody,
        }
    }

    /// Override the canonicalization mode.
    #[must_use]
    pub fn with_canonicalization(mut self, canonicalization: Canonicalization) -> Self {
        self.canonicalization = canonicalization;
        self
    }

    /// Read `SECRET_SIGNATURE`, `REQUIRE_SECRET` and
    /// `SIGNATURE_CANONICALIZATION` through `lookup`.
    ///
    /// An absent secret yields an empty key unless `REQUIRE_SECRET` is set.
    /// Callers should warn about an empty key once logging is up.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> GateResult<Self> {
        let secret = SecretKey::from(lookup("SECRET_SIGNATURE").unwrap_or_default());
        let require_secret = match lookup("REQUIRE_SECRET") {
            Some(v) => parse_bool("REQUIRE_SECRET", &v)?,
            None => false,
        };

        if secret.is_empty() && require_secret {
            return Err(GateError::MissingSecret);
        }

        let canonicalization = match lookup("SIGNATURE_CANONICALIZATION") {
            Some(v) => v.parse()?,
            None => Canonicalization::default(),
        };

        Ok(Self {
            secret,
            canonicalization,
        })
    }
}

/// Configuration for the verifying server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub listen_addr: String,
    /// Log level filter, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Signing settings, shared read-only across requests.
    pub signing: Arc<SigningConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_owned(),
            log_level: "info".to_owned(),
            signing: Arc::new(SigningConfig::default()),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> GateResult<Self> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> GateResult<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("GATEWAY_LISTEN") {
            config.listen_addr = v;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        config.signing = Arc::new(SigningConfig::from_lookup(lookup)?);

        Ok(config)
    }
}

/// Configuration for the signing client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint the signed payload is posted to.
    pub endpoint: String,
    /// Log level filter, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Signing settings.
    pub signing: SigningConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/".to_owned(),
            log_level: "info".to_owned(),
            signing: SigningConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> GateResult<Self> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> GateResult<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("SERVER_URL") {
            config.endpoint = v;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        config.signing = SigningConfig::from_lookup(lookup)?;

        Ok(config)
    }
}

fn parse_bool(name: &'static str, value: &str) -> GateResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(GateError::InvalidSetting {
            name,
            value: value.to_owned(),
        }),
    }
}
