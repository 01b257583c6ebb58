//! Module for the message commands.
//!
//! This module handles the 'log', 'debug', 'warn', 'error' and 'demo' commands. Each command
//! binds the configured logger to the given caller label and writes through the bound
//! functions, exactly as a tool built on unilog would.

use log::debug;
use unilog::constants::{LOG_LEVEL_MAX, LOG_LEVEL_MIN_DEBUG};
use unilog::error::{LogError, Result};
use unilog::{Logger, create_log_functions, report_error};

/// Handle the 'log' command.
pub fn handle_log(logger: &dyn Logger, caller: &str, message: &str) -> Result<()> {
    create_log_functions(logger, caller)?.log(message)
}

/// Handle the 'debug' command.
///
/// # Arguments
///
/// * `logger`      - The configured logger.
/// * `caller`      - The caller label.
/// * `debug_level` - Debug level relative to the least verbose one, as given by the user.
/// * `message`     - The message to log.
///
/// # Returns
///
/// * `Result<()>` - `InvalidLevel` if `debug_level` is outside the debug band.
pub fn handle_debug(
    logger: &dyn Logger,
    caller: &str,
    debug_level: i64,
    message: &str,
) -> Result<()> {
    let functions = create_log_functions(logger, caller)?;
    // User input: reject what the bound function would treat as a programming error.
    if debug_level < 0 {
        return Err(report_error(LogError::InvalidLevel(format!(
            "debug level {}",
            debug_level
        ))));
    }
    functions.log_debug(message, debug_level)
}

/// Handle the 'warn' command.
pub fn handle_warn(logger: &dyn Logger, caller: &str, message: &str) -> Result<()> {
    create_log_functions(logger, caller)?.warn(message)
}

/// Handle the 'error' command. Always fails once the error has been logged.
pub fn handle_error(logger: &dyn Logger, caller: &str, message: &str) -> Result<()> {
    let functions = create_log_functions(logger, caller)?;
    Err(functions.log_and_abort(LogError::Aborted, message))
}

/// Handle the 'demo' command.
///
/// Logs a general message, one debug message per debug level, a warning and finally an
/// error through `log_and_abort`. The returned error is swallowed so the run succeeds.
///
/// # Examples
/// ```rust
/// // handle_demo(logger.as_ref(), "MyMethod")?;
/// ```
pub fn handle_demo(logger: &dyn Logger, caller: &str) -> Result<()> {
    let functions = create_log_functions(logger, caller)?;

    functions.log("General message")?;
    for debug_level in 0..=(LOG_LEVEL_MAX - LOG_LEVEL_MIN_DEBUG) {
        functions.log_debug(
            &format!("Debug message level {}", LOG_LEVEL_MIN_DEBUG + debug_level),
            debug_level,
        )?;
    }
    functions.warn("Something is not quite right")?;

    let error = functions.log_and_abort(LogError::Aborted, "Something is definitely wrong");
    debug!("Demo finished with expected error: {}", error);
    Ok(())
}
