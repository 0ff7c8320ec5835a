//! Bind/serve loop with graceful shutdown
//!
//! All fixtures share the same listener contract: bind a port, serve a
//! router with the runtime's default request concurrency, and stop
//! accepting connections once the shutdown future resolves. The shutdown
//! future is a parameter so binaries can pass [`shutdown_signal`] while
//! tests pass a trigger they control.

use std::future::Future;
use std::net::Ipv4Addr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::Result;

/// Bind a listener on all interfaces.
///
/// Port 0 asks the OS for a free port; the chosen address is available
/// through `TcpListener::local_addr`.
pub async fn bind(port: u16) -> Result<TcpListener> {
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await?;
    Ok(listener)
}

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// Returns once in-flight requests have drained and the listener has
/// been released.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("server is listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("listener stopped");
    Ok(())
}

/// Resolves when the process receives an interrupt (Ctrl-C).
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("interrupt received, shutting down"),
        Err(e) => error!("failed to listen for interrupt: {}", e),
    }
}
