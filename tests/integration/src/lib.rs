//! End-to-end tests for HmacGate.
//!
//! Each test binds a real server to an ephemeral port on `127.0.0.1` inside
//! the test process and talks to it over TCP, so no external setup is needed:
//!
//! ```text
//! cargo test -p hmacgate-integration
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Once};

use hmacgate_core::SigningConfig;
use hmacgate_http::{SignatureAuthService, ValidHandler, serve};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

mod test_rejection;
mod test_roundtrip;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A server running on a background task.
#[derive(Debug)]
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl TestServer {
    /// Start a server verifying with `config`.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start(config: SigningConfig) -> Self {
        init_tracing();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        let service = SignatureAuthService::new(Arc::new(ValidHandler), Arc::new(config));
        let (tx, rx) = oneshot::channel::<()>();
        let task = tokio::spawn(serve(listener, service, async {
            rx.await.ok();
        }));

        Self {
            addr,
            shutdown: Some(tx),
            task,
        }
    }

    /// URL of `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Signal shutdown and wait for in-flight connections to drain.
    ///
    /// # Panics
    ///
    /// Panics if the server task panicked.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            tx.send(()).ok();
        }
        self.task.await.expect("server task");
    }
}

/// The payload the demo client sends.
#[must_use]
pub fn demo_payload() -> hmacgate_core::Payload {
    hmacgate_core::Payload::new("2024-08-15T14:00:00Z", "John Doe", "123456789")
}
