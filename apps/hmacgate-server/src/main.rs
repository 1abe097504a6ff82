//! HmacGate Server - verifies HMAC-SHA512 request signatures.
//!
//! Every request, on any path, must carry an `x-signature` header holding
//! `Base64(Hex(HMAC-SHA512(secret, body)))`. Verified requests are answered
//! with `200 Valid!`, all others with `403 Invalid Signature`.
//!
//! # Usage
//!
//! ```text
//! SECRET_SIGNATURE=rahasia hmacgate-server
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GATEWAY_LISTEN` | `127.0.0.1:8080` | Bind address |
//! | `SECRET_SIGNATURE` | *(empty)* | Shared HMAC secret |
//! | `REQUIRE_SECRET` | `false` | Refuse to start without a secret |
//! | `SIGNATURE_CANONICALIZATION` | `raw` | `raw` or `fields` |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use hmacgate_core::{ServerConfig, init_tracing};
use hmacgate_http::{SignatureAuthService, ValidHandler, serve};

/// Server version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env().context("invalid server configuration")?;
    init_tracing(&config.log_level).context("failed to initialize logging")?;

    if config.signing.secret.is_empty() {
        warn!("SECRET_SIGNATURE is empty; requests are verified with an empty key");
    }

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.listen_addr))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(
        %addr,
        mode = %config.signing.canonicalization,
        version = VERSION,
        "starting HmacGate Server",
    );

    let service = SignatureAuthService::new(Arc::new(ValidHandler), config.signing);
    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    serve(listener, service, shutdown).await;
    Ok(())
}
