//! Static-response listener
//!
//! The smallest app a harness can deploy: every request, whatever the
//! path or method, gets the same greeting back.

use axum::Router;

/// Greeting returned for every request.
pub const GREETING: &str = "Hello World!";

/// Build the router. The handler is mounted as the fallback so the
/// greeting covers every path, not just `/`.
pub fn router() -> Router {
    Router::new().fallback(greet)
}

async fn greet() -> &'static str {
    GREETING
}
