//! Shared plumbing for the app fixtures.
//!
//! Every fixture in this workspace is a single stateless HTTP listener
//! that an external harness deploys and pokes. This crate holds the
//! pieces they all share:
//!
//! - [`config`] - Listen port selection from the environment
//! - [`server`] - Bind/serve loop with graceful shutdown
//! - [`logging`] - tracing subscriber initialization
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```ignore
//! use axum::{routing::get, Router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     fixture_core::logging::init();
//!
//!     let port = fixture_core::config::required_port()?;
//!     let listener = fixture_core::bind(port).await?;
//!     let app = Router::new().route("/", get(|| async { "hi" }));
//!     fixture_core::serve(listener, app, fixture_core::shutdown_signal()).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod server;

// Re-exports for convenience
pub use error::{FixtureError, Result};
pub use server::{bind, serve, shutdown_signal};
