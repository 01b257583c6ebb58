//! Module for log functions pre-bound to a logger and a caller label.
//!
//! Tools typically create one logger at startup and hand each component a [`LogFunctions`]
//! carrying its own caller label, so call sites only pass the message.

use crate::constants::{LOG_LEVEL_DEFAULT, LOG_LEVEL_MIN_DEBUG};
use crate::error::{LogError, Result};
use crate::logger::{Logger, report_error};
use log::debug;

/// General, debug, warning and error functions bound to a logger and a caller label.
#[derive(Clone)]
pub struct LogFunctions<'a> {
    logger: &'a dyn Logger,
    caller: String,
}

/// Create the set of log functions a component uses for all of its messages.
///
/// # Arguments
///
/// * `logger` - The logger to write through, typically created with
///   [`create_logger`](crate::create_logger).
/// * `caller` - Name of the component doing the logging, included in every line.
///
/// # Returns
///
/// * `Result<LogFunctions>` - `InvalidValue` if `caller` is empty. The failure is reported on
///   standard error before it is returned.
///
/// # Examples
/// ```rust
/// // let logger = create_logger(None)?;
/// // let log = create_log_functions(logger.as_ref(), "MyMethod")?;
/// // log.log("Starting")?;
/// // log.log_debug("Iteration 1", 0)?;
/// ```
pub fn create_log_functions<'a>(
    logger: &'a dyn Logger,
    caller: &str,
) -> Result<LogFunctions<'a>> {
    if caller.is_empty() {
        return Err(report_error(LogError::InvalidValue(
            "Given logger caller is an empty string".to_string(),
        )));
    }

    Ok(LogFunctions {
        logger,
        caller: caller.to_string(),
    })
}

impl<'a> LogFunctions<'a> {
    /// Log a general message at `LOG_LEVEL_DEFAULT`.
    pub fn log(&self, message: &str) -> Result<()> {
        self.logger.log(&self.caller, message, LOG_LEVEL_DEFAULT)
    }

    /// Log a debug message.
    ///
    /// `debug_level` is relative to `LOG_LEVEL_MIN_DEBUG`: 0 is the least verbose debug level
    /// and `LOG_LEVEL_MAX - LOG_LEVEL_MIN_DEBUG` the most verbose.
    ///
    /// # Panics
    ///
    /// If `debug_level` is negative. Levels above the most verbose one are returned as
    /// `InvalidLevel` by the logger.
    pub fn log_debug(&self, message: &str, debug_level: i64) -> Result<()> {
        assert!(debug_level >= 0, "negative debug level ({})", debug_level);
        let message_level = LOG_LEVEL_MIN_DEBUG.saturating_add(debug_level);
        self.logger.log(&self.caller, message, message_level)
    }

    /// Log a warning.
    pub fn warn(&self, message: &str) -> Result<()> {
        self.logger.warn(&self.caller, message)
    }

    /// Log `message` as an error and return the error built from it by `kind`.
    ///
    /// A failure to write the error line is ignored in favour of the returned error.
    ///
    /// # Examples
    /// ```rust
    /// // if mesh.is_empty() {
    /// //     return Err(log.log_and_abort(LogError::InvalidValue, "Empty mesh"));
    /// // }
    /// ```
    pub fn log_and_abort<E>(&self, kind: impl FnOnce(String) -> E, message: &str) -> E {
        if let Err(e) = self.logger.error(&self.caller, message) {
            debug!("Could not log error '{}': {}", message, e);
        }
        kind(message.to_string())
    }

    /// The logger these functions write through.
    pub fn logger(&self) -> &'a dyn Logger {
        self.logger
    }

    /// The caller label included in every line.
    pub fn caller(&self) -> &str {
        &self.caller
    }
}
