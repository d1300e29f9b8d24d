//! Diagnostic logging setup.
//!
//! User-facing progress goes to stdout through the command handlers; this
//! subscriber only carries `tracing` diagnostics, written to stderr.

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "dynasty_ffl=info"
    } else {
        "dynasty_ffl=warn"
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
