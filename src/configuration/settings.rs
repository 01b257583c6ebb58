//! Module for logger configuration settings.
//!
//! This module defines the typed logger configuration, which serializes to the mapping consumed
//! by [`create_logger`](super::create_logger), and functions to load a configuration mapping
//! persisted on disk as JSON.
//!
//! # Details
//! Loading does not validate the mapping. Validation belongs to the factory so that a file on
//! disk and a mapping built in code go through exactly the same checks.

use crate::configuration::factory::create_logger;
use crate::constants::LOG_LEVEL_DEFAULT;
use crate::error::Result;
use crate::logger::{Logger, report_error};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggerConfig {
    /// Verbosity level of the logger.
    #[serde(rename = "Level")]
    pub level: i64,

    /// Log file, for file loggers only.
    #[serde(rename = "Filename", skip_serializing_if = "Option::is_none")]
    pub filename: Option<PathBuf>,

    /// Whether a pre-existing log file may be replaced, for file loggers only.
    #[serde(rename = "Overwrite", skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

impl LoggerConfig {
    /// Configuration of a console logger at `level`.
    pub fn console(level: i64) -> Self {
        LoggerConfig {
            level,
            filename: None,
            overwrite: None,
        }
    }

    /// Configuration of a file logger at `level` writing to `filename`.
    pub fn file(level: i64, filename: impl Into<PathBuf>, overwrite: bool) -> Self {
        LoggerConfig {
            level,
            filename: Some(filename.into()),
            overwrite: Some(overwrite),
        }
    }

    /// Convert to the configuration mapping.
    ///
    /// # Returns
    ///
    /// * `Result<Value>` - A JSON object, or a serialization error if the filename is not
    ///   valid UTF-8.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Build the logger described by this configuration.
    ///
    /// # Examples
    /// ```rust
    /// // let logger = LoggerConfig::file(LOG_LEVEL_MAX, "run.log", true).create_logger()?;
    /// ```
    pub fn create_logger(&self) -> Result<Box<dyn Logger>> {
        let value = self.to_value().map_err(report_error)?;
        create_logger(Some(&value))
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::console(LOG_LEVEL_DEFAULT)
    }
}

/// Load a configuration mapping from a JSON file.
///
/// # Arguments
///
/// * `path` - The JSON file to read.
///
/// # Returns
///
/// * `Result<Value>` - The parsed document. Read and parse failures are reported on standard
///   error before they are returned.
///
/// # Examples
/// ```rust
/// // let configuration = load_configuration(Path::new("logger.json"))?;
/// // let logger = create_logger(Some(&configuration))?;
/// ```
pub fn load_configuration(path: &Path) -> Result<Value> {
    debug!("Loading logger configuration from {}", path.display());
    let json = fs::read_to_string(path).map_err(|e| report_error(e.into()))?;
    serde_json::from_str(&json).map_err(|e| report_error(e.into()))
}

/// Load the per-user configuration mapping if one has been saved.
///
/// # Returns
///
/// * `Result<Option<Value>>` - `None` when no configuration file exists.
pub fn load_default_configuration() -> Result<Option<Value>> {
    match get_config_path() {
        Some(path) if path.is_file() => load_configuration(&path).map(Some),
        _ => Ok(None),
    }
}

/// Get the path to the per-user configuration file.
///
/// # Returns
///
/// * `Option<PathBuf>` - `None` if the platform has no configuration directory.
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("unilog").join("logger.json"))
}
