//! Accept loop serving a [`SignatureAuthService`] over TCP.

use std::future::Future;

use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::handler::SignedHandler;
use crate::service::SignatureAuthService;

/// Serve connections from `listener` until `shutdown` resolves.
///
/// Each connection runs on its own task over HTTP/1 or HTTP/2. Once
/// `shutdown` completes no new connections are accepted, and the call
/// returns after in-flight connections have drained.
pub async fn serve<H, F>(listener: TcpListener, service: SignatureAuthService<H>, shutdown: F)
where
    H: SignedHandler,
    F: Future<Output = ()>,
{
    let graceful = GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    graceful.shutdown().await;
    info!("all connections drained");
}
