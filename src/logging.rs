//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber writing to stderr, so
//! CLI output on stdout stays clean. `RUST_LOG` wins when set; otherwise
//! the crate logs at info (debug with `verbose`).

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "portfolio_viewer=debug"
    } else {
        "portfolio_viewer=info"
    }
}

/// Installs the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
