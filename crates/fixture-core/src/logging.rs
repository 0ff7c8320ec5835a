//! tracing subscriber initialization

use tracing_subscriber::EnvFilter;

/// Initialize logging for a fixture binary.
///
/// Honors `RUST_LOG`, defaulting to `info`. Only the first call installs
/// a subscriber, so tests may call this repeatedly.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
