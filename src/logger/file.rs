//! Module for the file logger backend.
//!
//! This module provides a logger that appends every general, debug, warning and error message
//! to a text file. Errors are also written to standard error.
//!
//! # Details
//! The file is opened in append mode, written and closed again for every message. No handle is
//! held between calls, so a log file removed by someone else is simply recreated by the next
//! message. Nothing is created on disk until the first message is written.

use super::{
    Logger, Sink, error_line, general_line, report_error, report_warning, validate_level,
    validate_message_level, warning_line,
};
use crate::error::{LogError, Result};
use log::debug;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Logger appending to a text file.
pub struct FileLogger {
    level: i64,
    filename: PathBuf,
    err: Sink,
}

impl FileLogger {
    /// Create a logger that writes to `filename`.
    ///
    /// The level is validated before the filesystem is touched, so a bad level never deletes a
    /// pre-existing file.
    ///
    /// # Arguments
    ///
    /// * `level`     - Verbosity level, in `[LOG_LEVEL_NONE, LOG_LEVEL_MAX]`.
    /// * `filename`  - Path of the log file. Relative paths are resolved against the current
    ///   directory.
    /// * `overwrite` - Allow a pre-existing file at `filename` to be replaced.
    ///
    /// # Returns
    ///
    /// * `Result<FileLogger>` - On failure, one of
    ///   - `InvalidLevel` if `level` is out of range,
    ///   - `InvalidValue` if `filename` is empty,
    ///   - `PathConflict` if `filename` exists but is not a regular file,
    ///   - `AlreadyExists` if `filename` is an existing file and `overwrite` is false.
    ///
    ///   Every failure is reported on standard error before it is returned.
    ///
    /// # Examples
    /// ```rust
    /// // let logger = FileLogger::new(LOG_LEVEL_MAX, "run.log", true)?;
    /// // logger.warn("MyTool", "Mesh is coarse")?;
    /// ```
    pub fn new(level: i64, filename: impl AsRef<Path>, overwrite: bool) -> Result<Self> {
        let level = validate_level(level)?;

        let filename = filename.as_ref();
        if filename.as_os_str().is_empty() {
            return Err(report_error(LogError::InvalidValue(
                "Empty filename given".to_string(),
            )));
        }

        let filename = resolve(filename).map_err(|e| report_error(e.into()))?;
        debug!("Resolved log file to {}", filename.display());

        if let Ok(metadata) = fs::metadata(&filename) {
            if !metadata.is_file() {
                return Err(report_error(LogError::PathConflict(filename)));
            } else if !overwrite {
                return Err(report_error(LogError::AlreadyExists(filename)));
            }

            report_warning(&format!("Overwriting {}", filename.display()));
            fs::remove_file(&filename).map_err(|e| report_error(e.into()))?;
            debug!("Removed pre-existing log file {}", filename.display());
        }

        Ok(FileLogger {
            level,
            filename,
            err: Sink::stderr(),
        })
    }

    /// Redirect the error-stream copy of error messages to `err`.
    pub fn with_error_writer(mut self, err: impl Write + Send + 'static) -> Self {
        self.err = Sink::new(err);
        self
    }

    /// Absolute path of the file to which log lines are written.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    fn append(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.filename)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// Resolve `path` to an absolute path, following symlinks when it already exists.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(_) => std::path::absolute(path),
    }
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogger")
            .field("level", &self.level)
            .field("filename", &self.filename)
            .finish()
    }
}

impl Logger for FileLogger {
    fn level(&self) -> i64 {
        self.level
    }

    fn log(&self, caller: &str, message: &str, message_level: i64) -> Result<()> {
        validate_message_level(message_level)?;
        if self.enabled(message_level) {
            self.append(&general_line(caller, message))?;
        }
        Ok(())
    }

    fn warn(&self, caller: &str, message: &str) -> Result<()> {
        self.append(&warning_line(caller, message))
    }

    fn error(&self, caller: &str, message: &str) -> Result<()> {
        let line = error_line(caller, message);
        self.err.write_line(&line, true)?;
        self.append(&line)
    }
}
