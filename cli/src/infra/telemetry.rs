//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "warn,rlc_cli=debug" } else { "warn" }
}

/// Initialize `tracing`, writing to stderr so stdout stays clean for
/// instance output and JSON.
///
/// # Errors
///
/// Returns an error if a global subscriber cannot be installed.
pub fn init_tracing(verbose: bool) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    fmt()
        .with_env_filter(env_filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
