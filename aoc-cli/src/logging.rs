//! Diagnostic tracing, separate from the answers printed to stdout
//!
//! Reads `RUST_LOG`; defaults to `warn`, which is where skipped day files and other
//! recoverable problems are reported.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber: compact lines on stderr
///
/// ```bash
/// RUST_LOG=aoc=debug aoc run --year 2015 --day 1
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
