//! Module for selecting the logger configuration of a run.
//!
//! The configuration comes from, in order of preference, an explicit `--config` file, the
//! logger flags, or the per-user configuration file.

use log::debug;
use serde_json::{Map, Value, json};
use std::path::Path;
use unilog::configuration::{load_configuration, load_default_configuration};
use unilog::constants::{LOG_FILENAME_KEY, LOG_LEVEL_DEFAULT, LOG_LEVEL_KEY, LOG_OVERWRITE_KEY};
use unilog::error::Result;

/// Resolve the configuration mapping handed to the logger factory.
///
/// # Arguments
///
/// * `config_path` - Optional JSON configuration file.
/// * `log_level`   - Optional logger level flag.
/// * `log_file`    - Optional log file flag.
/// * `overwrite`   - Optional overwrite flag.
///
/// # Returns
///
/// * `Result<Option<Value>>` - `None` selects the default console logger.
///
/// # Details
/// Flags are copied into the mapping verbatim, even in combinations the factory rejects, so
/// that the command line gets exactly the same validation as a configuration file.
pub fn resolve_configuration(
    config_path: Option<&Path>,
    log_level: Option<i64>,
    log_file: Option<&Path>,
    overwrite: Option<bool>,
) -> Result<Option<Value>> {
    if let Some(path) = config_path {
        return load_configuration(path).map(Some);
    }

    if log_level.is_none() && log_file.is_none() && overwrite.is_none() {
        debug!("No logger flags given, looking for a saved configuration");
        return load_default_configuration();
    }

    let mut fields = Map::new();
    fields.insert(
        LOG_LEVEL_KEY.to_string(),
        json!(log_level.unwrap_or(LOG_LEVEL_DEFAULT)),
    );
    if let Some(file) = log_file {
        fields.insert(
            LOG_FILENAME_KEY.to_string(),
            json!(file.to_string_lossy()),
        );
    }
    if let Some(overwrite) = overwrite {
        fields.insert(LOG_OVERWRITE_KEY.to_string(), json!(overwrite));
    }

    Ok(Some(Value::Object(fields)))
}
