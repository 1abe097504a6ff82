//! HmacGate Client - sends one signed payload and reports the answer.
//!
//! # Usage
//!
//! ```text
//! SECRET_SIGNATURE=rahasia SERVER_URL=http://localhost:8080/ hmacgate-client
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SERVER_URL` | `http://localhost:8080/` | Target endpoint |
//! | `SECRET_SIGNATURE` | *(empty)* | Shared HMAC secret |
//! | `REQUIRE_SECRET` | `false` | Refuse to run without a secret |
//! | `SIGNATURE_CANONICALIZATION` | `raw` | `raw` or `fields` |
//! | `PAYLOAD_TRANSACTION_DATETIME` | `2024-08-15T14:00:00Z` | Payload field |
//! | `PAYLOAD_CUSTOMER_NAME` | `John Doe` | Payload field |
//! | `PAYLOAD_REQUEST_ID` | `123456789` | Payload field |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result};
use tracing::{info, warn};

use hmacgate_client::SigningClient;
use hmacgate_core::{ClientConfig, Payload, init_tracing};

const DEMO_TRANSACTION_DATETIME: &str = "2024-08-15T14:00:00Z";
const DEMO_CUSTOMER_NAME: &str = "John Doe";
const DEMO_REQUEST_ID: &str = "123456789";

/// The demo payload, with each field overridable through `lookup`.
fn payload_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Payload {
    Payload::new(
        lookup("PAYLOAD_TRANSACTION_DATETIME")
            .unwrap_or_else(|| DEMO_TRANSACTION_DATETIME.to_owned()),
        lookup("PAYLOAD_CUSTOMER_NAME").unwrap_or_else(|| DEMO_CUSTOMER_NAME.to_owned()),
        lookup("PAYLOAD_REQUEST_ID").unwrap_or_else(|| DEMO_REQUEST_ID.to_owned()),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::from_env().context("invalid client configuration")?;
    init_tracing(&config.log_level).context("failed to initialize logging")?;

    if config.signing.secret.is_empty() {
        warn!("SECRET_SIGNATURE is empty; payloads are signed with an empty key");
    }

    let payload = payload_from_lookup(|name| std::env::var(name).ok());

    let client = SigningClient::new(&config.signing);
    let response = client
        .send(&payload, &config.endpoint)
        .await
        .with_context(|| format!("failed to send signed payload to {}", config.endpoint))?;

    info!(status = response.status.as_u16(), "server answered");
    println!("Response Status: {}", response.status);
    println!("Response Body: {}", response.body);

    Ok(())
}
