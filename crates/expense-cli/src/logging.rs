//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::constants::LOG_ENV;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the log filter from EXPENSES_LOG, falling back to `warn`.
///
/// An unparsable value is reported once and ignored.
pub fn env_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => {
            EnvFilter::try_new(&value).unwrap_or_else(|e| {
                eprintln!("Ignoring invalid {}={}: {}", LOG_ENV, value, e);
                EnvFilter::new(DEFAULT_DIRECTIVE)
            })
        }
        _ => EnvFilter::new(DEFAULT_DIRECTIVE),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// parseable for `--json` and `export -`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter()),
        )
        .init();
}
