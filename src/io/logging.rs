//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

use crate::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Build the log filter
///
/// `--verbose` forces debug output for this crate; otherwise `RUST_LOG` is
/// honored when set and valid, falling back to [`DEFAULT_LOG_FILTER`].
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_LOG_FILTER);
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a formatting subscriber writing to stderr
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
