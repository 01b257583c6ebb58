//! Module for the 'levels' command.
//!
//! Prints the verbosity levels a logger can be configured with and the messages each lets
//! through.

use colored::Colorize;
use unilog::constants::{LOG_LEVEL_DEFAULT, LOG_LEVEL_MIN_DEBUG, LOG_LEVEL_NONE, LOG_LEVELS};

/// Describe what a logger at `level` writes.
pub fn describe_level(level: i64) -> String {
    match level {
        LOG_LEVEL_NONE => "warnings and errors only".to_string(),
        LOG_LEVEL_DEFAULT => "general messages".to_string(),
        _ => format!(
            "general messages and debug levels 0 to {}",
            level - LOG_LEVEL_MIN_DEBUG
        ),
    }
}

/// Handle the 'levels' command.
pub fn handle_levels() {
    for level in LOG_LEVELS {
        let name = match level {
            LOG_LEVEL_NONE => "none".red(),
            LOG_LEVEL_DEFAULT => "default".green(),
            _ => format!("debug {}", level - LOG_LEVEL_MIN_DEBUG).as_str().yellow(),
        };
        println!("{:>2}  {:<8} {}", level, name, describe_level(level));
    }
}
