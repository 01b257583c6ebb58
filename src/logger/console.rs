//! Module for the console logger backend.
//!
//! General, debug and warning messages go to standard output. Errors go to standard error and
//! are flushed immediately.

use super::{
    Logger, Sink, error_line, general_line, validate_level, validate_message_level, warning_line,
};
use crate::constants::{LOG_LEVEL_DEFAULT, LOG_LEVEL_NONE};
use crate::error::Result;
use std::fmt;
use std::io::Write;

/// Logger writing to the standard streams.
pub struct ConsoleLogger {
    level: i64,
    out: Sink,
    err: Sink,
}

impl ConsoleLogger {
    /// Create a console logger writing to the process's standard output and error.
    ///
    /// # Arguments
    ///
    /// * `level` - Verbosity level, in `[LOG_LEVEL_NONE, LOG_LEVEL_MAX]`.
    ///
    /// # Returns
    ///
    /// * `Result<ConsoleLogger>` - `InvalidLevel` if `level` is out of range. The failure is
    ///   reported on standard error before it is returned.
    ///
    /// # Examples
    /// ```rust
    /// // let logger = ConsoleLogger::new(LOG_LEVEL_DEFAULT)?;
    /// // logger.log("MyTool", "Starting", LOG_LEVEL_DEFAULT)?;
    /// ```
    pub fn new(level: i64) -> Result<Self> {
        Ok(Self::from_parts(validate_level(level)?, Sink::stdout(), Sink::stderr()))
    }

    /// Create a console logger whose output and error streams are redirected to the given
    /// writers.
    pub fn with_writers(
        level: i64,
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Result<Self> {
        Ok(Self::from_parts(validate_level(level)?, Sink::new(out), Sink::new(err)))
    }

    /// Throwaway logger used to report failures when no usable logger exists.
    pub(crate) fn reporter() -> Self {
        Self::from_parts(LOG_LEVEL_NONE, Sink::stdout(), Sink::stderr())
    }

    fn from_parts(level: i64, out: Sink, err: Sink) -> Self {
        ConsoleLogger { level, out, err }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::from_parts(LOG_LEVEL_DEFAULT, Sink::stdout(), Sink::stderr())
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger").field("level", &self.level).finish()
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> i64 {
        self.level
    }

    fn log(&self, caller: &str, message: &str, message_level: i64) -> Result<()> {
        validate_message_level(message_level)?;
        if self.enabled(message_level) {
            self.out.write_line(&general_line(caller, message), false)?;
        }
        Ok(())
    }

    fn warn(&self, caller: &str, message: &str) -> Result<()> {
        self.out.write_line(&warning_line(caller, message), false)?;
        Ok(())
    }

    fn error(&self, caller: &str, message: &str) -> Result<()> {
        self.err.write_line(&error_line(caller, message), true)?;
        Ok(())
    }
}
