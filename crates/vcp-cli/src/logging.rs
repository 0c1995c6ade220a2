//! Logging setup.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber filtered by `directive`.
///
/// Falls back to `warn` if the directive does not parse.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(directive: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()
}
