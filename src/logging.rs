//! Diagnostic tracing for the walker.
//!
//! Engine events (steps, collected letters, diagnoses) are emitted with
//! `tracing` and written to stderr. Filtering follows `RUST_LOG`.
//!
//! # Example
//! ```bash
//! RUST_LOG=tracktty=debug tracktty --headless track.txt
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset. The TUI passes `"off"`
/// so that log lines do not draw over the alternate screen.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
