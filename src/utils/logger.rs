//! Module for initializing the diagnostic logger.
//!
//! This module sets the verbosity of the CLI's own diagnostics based on the user-provided
//! command line options. Diagnostics go to stderr so they never mix with messages the unilog
//! logger writes to stdout.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Initialize diagnostic logging with the specified verbosity level
///
/// # Arguments
/// * `verbosity` - The verbosity level (0 for Warn, 1 for Debug, and >=2 for Trace).
///
/// # Examples
/// ```rust
/// // Initialize logger with Debug verbosity.
/// init_logger(1);
/// ```
pub fn init_logger(verbosity: u8) {
    let log_level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();
}
