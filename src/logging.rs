//! Diagnostic logging to stderr.
//!
//! Stdout belongs to the frames, so all log output goes to stderr. The
//! filter comes from `ASCIIPV_LOG` when set, else from the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a filter directive, e.g. `asciipv=debug`.
pub const LOG_ENV: &str = "ASCIIPV_LOG";

/// Build the filter from `ASCIIPV_LOG`, falling back to `level`.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(level: &str) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    // Fails only when a subscriber is already installed
    tracing_subscriber::registry()
        .with(filter(level))
        .with(fmt_layer)
        .try_init()
        .ok();
}
