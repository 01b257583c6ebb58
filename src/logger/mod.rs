//! Module defining the logger capability shared by every backend.
//!
//! Every tool in the family communicates general, debug, warning and error messages through a
//! value implementing [`Logger`]. Two backends are provided: [`ConsoleLogger`] writes to the
//! standard streams and [`FileLogger`] appends to a text file.
//!
//! # Details
//! Failures that happen while a logger is being built cannot be written through that logger.
//! They are reported through a throwaway console logger at `LOG_LEVEL_NONE`, so only its
//! unconditional warning and error channels ever fire, before the error is returned.

pub mod console;
pub mod file;

pub use console::ConsoleLogger;
pub use file::FileLogger;

use crate::constants::{RESERVED_TAG, is_valid_level, is_valid_message_level};
use crate::error::{LogError, Result};
use log::debug;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Capability implemented by every logger backend.
pub trait Logger {
    /// All general and debug messages with a level less than or equal to this value are
    /// logged. Warnings and errors are logged regardless of it.
    fn level(&self) -> i64;

    /// Log `message` if the logger's level is greater than or equal to `message_level`.
    ///
    /// # Arguments
    ///
    /// * `caller`        - Name of the calling code, included in the logged line.
    /// * `message`       - Message to potentially log.
    /// * `message_level` - Level of the message, in `(LOG_LEVEL_NONE, LOG_LEVEL_MAX]`.
    ///
    /// # Returns
    ///
    /// * `Result<()>` - `InvalidLevel` if `message_level` is not a message level.
    fn log(&self, caller: &str, message: &str, message_level: i64) -> Result<()>;

    /// Log `message` so that it reads as a warning, regardless of the logger's level.
    fn warn(&self, caller: &str, message: &str) -> Result<()>;

    /// Log `message` so that it reads as an error, regardless of the logger's level.
    fn error(&self, caller: &str, message: &str) -> Result<()>;

    /// Whether a message at `message_level` passes this logger's level gate.
    fn enabled(&self, message_level: i64) -> bool {
        self.level() >= message_level
    }
}

/// Format a general or debug line.
pub(crate) fn general_line(caller: &str, message: &str) -> String {
    format!("[{}] {}\n", caller, message)
}

/// Format a warning line.
pub(crate) fn warning_line(caller: &str, message: &str) -> String {
    format!("[{}] WARNING - {}\n", caller, message)
}

/// Format an error line.
pub(crate) fn error_line(caller: &str, message: &str) -> String {
    format!("[{}] ERROR - {}\n", caller, message)
}

/// A writable stream shared behind `&self`.
pub(crate) struct Sink(Mutex<Box<dyn Write + Send>>);

impl Sink {
    pub(crate) fn new(writer: impl Write + Send + 'static) -> Self {
        Sink(Mutex::new(Box::new(writer)))
    }

    pub(crate) fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub(crate) fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Write one complete line, flushing afterwards when `flush` is set.
    pub(crate) fn write_line(&self, line: &str, flush: bool) -> io::Result<()> {
        let mut writer = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        if flush {
            writer.flush()?;
        }
        Ok(())
    }
}

/// Report `error` through a throwaway console logger and hand it back for propagation.
///
/// # Examples
/// ```rust
/// // return Err(report_error(LogError::InvalidValue("Empty filename given".to_string())));
/// ```
pub fn report_error(error: LogError) -> LogError {
    let reporter = ConsoleLogger::reporter();
    if let Err(e) = reporter.error(RESERVED_TAG, &error.to_string()) {
        debug!("Could not report error '{}': {}", error, e);
    }
    error
}

/// Emit a warning through a throwaway console logger.
pub fn report_warning(message: &str) {
    let reporter = ConsoleLogger::reporter();
    if let Err(e) = reporter.warn(RESERVED_TAG, message) {
        debug!("Could not report warning '{}': {}", message, e);
    }
}

/// Check a logger level at construction time.
pub(crate) fn validate_level(level: i64) -> Result<i64> {
    if is_valid_level(level) {
        Ok(level)
    } else {
        Err(report_error(LogError::InvalidLevel(level.to_string())))
    }
}

/// Check the level attached to a general or debug message.
pub(crate) fn validate_message_level(message_level: i64) -> Result<()> {
    if is_valid_message_level(message_level) {
        Ok(())
    } else {
        Err(report_error(LogError::InvalidLevel(message_level.to_string())))
    }
}
