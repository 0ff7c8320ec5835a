//! Environment-echo listener binary
//!
//! Binds `PORT` (default 8080) and reports the `CF_STACK` value for
//! every request. An interrupt shuts the listener down gracefully.

use fixture_core::{config, logging, server};

/// Port used when `PORT` is not provided.
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let port = config::port_or(DEFAULT_PORT)?;
    let listener = server::bind(port).await?;
    server::serve(
        listener,
        fixture_stack_echo::router(),
        server::shutdown_signal(),
    )
    .await?;

    Ok(())
}
