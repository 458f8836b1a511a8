//! Tracing subscriber setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive for the chosen verbosity
#[must_use]
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber. Call once, before any command runs.
pub fn setup_logging(verbose: bool) {
    let filter = EnvFilter::new(filter_directive(verbose));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
