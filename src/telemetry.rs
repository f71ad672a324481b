//! Logging setup. Everything goes to stderr; stdout carries only the report.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub fn level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .with_target(false);

    let filter = EnvFilter::new(level(verbose).to_string());

    // Fails only when a subscriber is already installed.
    Registry::default().with(filter).with(fmt_layer).try_init().ok();
}
