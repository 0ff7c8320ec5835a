//! Conditional-route listener with a database probe
//!
//! Three routes: a greeting, the toolchain version the app was built
//! with, and a MySQL connection probe. The probe dials a host that is
//! not expected to exist; the point is to hand the client library's
//! connection error back to the harness as an ordinary 200 response.

use axum::{routing::get, Router};
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, MySqlConnection};
use tracing::debug;

/// Hostname the probe dials. Deliberately unreachable in the
/// environments this fixture is deployed to.
pub const DB_HOST: &str = "testing";

/// Toolchain version baked in at build time.
pub const RUSTC_VERSION: &str = env!("RUSTC_VERSION");

/// Build the router. Paths outside the three routes get the framework's
/// default 404.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/version", get(version))
        .route("/mysql", get(mysql_probe))
}

async fn root() -> &'static str {
    "Hello World!"
}

async fn version() -> &'static str {
    RUSTC_VERSION
}

/// Dial the database host once and report the outcome as the body.
///
/// The connection failing is the expected case and is not an error from
/// the listener's point of view. No retry.
async fn mysql_probe() -> String {
    let options = MySqlConnectOptions::new().host(DB_HOST);
    match MySqlConnection::connect_with(&options).await {
        Ok(conn) => {
            let _ = conn.close().await;
            format!("connected to {}", DB_HOST)
        }
        Err(e) => {
            debug!("database probe failed: {}", e);
            e.to_string()
        }
    }
}
