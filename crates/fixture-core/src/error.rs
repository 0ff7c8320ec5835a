//! Error types for fixture startup and serving

use thiserror::Error;

/// Errors that can occur while configuring or running a fixture listener
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Required environment variable is not set
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Environment variable does not hold a port number
    #[error("invalid port {value:?} in {name}")]
    InvalidPort { name: &'static str, value: String },

    /// Listener I/O error (bind or serve)
    #[error("listener error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;
