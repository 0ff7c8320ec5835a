//! Conditional-route listener binary
//!
//! Binds the port given in `PORT` and dispatches on request path. An
//! interrupt shuts the listener down gracefully.

use fixture_core::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let port = config::required_port()?;
    let listener = server::bind(port).await?;
    server::serve(
        listener,
        fixture_db_probe::router(),
        server::shutdown_signal(),
    )
    .await?;

    Ok(())
}
