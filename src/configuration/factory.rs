//! Module for building loggers from a configuration mapping.
//!
//! The mapping is a JSON object with a required `Level` key and, for file loggers only, a
//! `Filename` and an `Overwrite` key that must be given together.

use crate::constants::{LOG_FILENAME_KEY, LOG_LEVEL_DEFAULT, LOG_LEVEL_KEY, LOG_OVERWRITE_KEY};
use crate::error::{LogError, Result};
use crate::logger::{ConsoleLogger, FileLogger, Logger, report_error};
use log::debug;
use serde_json::{Map, Value};

/// Create a logger from an optional configuration mapping.
///
/// # Arguments
///
/// * `configuration` - `None`, or the full logger configuration as a JSON object.
///
/// # Returns
///
/// * `Result<Box<dyn Logger>>` - A console logger at `LOG_LEVEL_DEFAULT` when `configuration`
///   is `None`, otherwise the logger described by the configuration. Every failure is
///   reported on standard error before it is returned.
///
/// # Examples
/// ```rust
/// // let logger = create_logger(Some(&json!({"Level": 2})))?;
/// // let logger = create_logger(Some(&json!({"Level": 1, "Filename": "run.log", "Overwrite": true})))?;
/// ```
pub fn create_logger(configuration: Option<&Value>) -> Result<Box<dyn Logger>> {
    let Some(configuration) = configuration else {
        debug!("No logger configuration given, using console logger");
        return Ok(Box::new(ConsoleLogger::new(LOG_LEVEL_DEFAULT)?));
    };

    let fields = configuration.as_object().ok_or_else(|| {
        report_error(LogError::InvalidArgument(
            "Given logger configuration is not a mapping".to_string(),
        ))
    })?;

    let level = fields
        .get(LOG_LEVEL_KEY)
        .ok_or_else(|| report_error(LogError::MissingField(LOG_LEVEL_KEY.to_string())))?;

    if fields.contains_key(LOG_FILENAME_KEY) {
        if !fields.contains_key(LOG_OVERWRITE_KEY) {
            return Err(report_error(LogError::MissingField(
                LOG_OVERWRITE_KEY.to_string(),
            )));
        }
        check_keys(fields, &[LOG_LEVEL_KEY, LOG_FILENAME_KEY, LOG_OVERWRITE_KEY])?;

        let level = level_from_value(level)?;
        let filename = fields[LOG_FILENAME_KEY].as_str().ok_or_else(|| {
            report_error(LogError::InvalidArgument(format!(
                "{} is not a string",
                fields[LOG_FILENAME_KEY]
            )))
        })?;
        let overwrite = fields[LOG_OVERWRITE_KEY].as_bool().ok_or_else(|| {
            report_error(LogError::InvalidArgument(format!(
                "overwrite ({}) is not a bool",
                fields[LOG_OVERWRITE_KEY]
            )))
        })?;

        debug!("Creating file logger at level {} for {}", level, filename);
        return Ok(Box::new(FileLogger::new(level, filename, overwrite)?));
    }

    check_keys(fields, &[LOG_LEVEL_KEY])?;
    let level = level_from_value(level)?;

    debug!("Creating console logger at level {}", level);
    Ok(Box::new(ConsoleLogger::new(level)?))
}

/// Extract an integer level. Range checking is left to the logger constructors.
fn level_from_value(value: &Value) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| report_error(LogError::InvalidLevel(value.to_string())))
}

/// Reject any key outside `allowed`.
fn check_keys(fields: &Map<String, Value>, allowed: &[&str]) -> Result<()> {
    let unexpected: Vec<&str> = fields
        .keys()
        .map(String::as_str)
        .filter(|key| !allowed.contains(key))
        .collect();

    if unexpected.is_empty() {
        Ok(())
    } else {
        Err(report_error(LogError::UnexpectedField(unexpected.join(", "))))
    }
}
