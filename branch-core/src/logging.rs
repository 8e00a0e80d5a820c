//! Logging Infrastructure
//!
//! Console logging for the dashboard core. `RUST_LOG` wins when set;
//! otherwise the given level applies.

use tracing_subscriber::EnvFilter;

/// Initialize the logger at "info".
pub fn init_logger() {
    init_logger_with_level("info");
}

/// Initialize the logger at an explicit level.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logger_with_level(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
