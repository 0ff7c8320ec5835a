//! Environment-echo listener
//!
//! Answers every request with the value of `CF_STACK`, so the harness
//! can see which stack the app was staged on.

use std::env;

use axum::Router;

/// Environment variable echoed in the response body.
pub const STACK_VAR: &str = "CF_STACK";

/// Build the router. A single fallback handler answers every path and
/// method.
pub fn router() -> Router {
    Router::new().fallback(stack)
}

/// The variable is read per request so the body always reflects the
/// current environment. Unset renders as an empty value.
async fn stack() -> String {
    format!("STACK: {}", env::var(STACK_VAR).unwrap_or_default())
}
