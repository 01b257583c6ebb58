//! Verbosity levels, the reserved reporter tag and the logger configuration keys.

use std::ops::RangeInclusive;

/// Disables general and debug logging. Warnings and errors are still written.
pub const LOG_LEVEL_NONE: i64 = 0;
/// Level of general messages.
pub const LOG_LEVEL_DEFAULT: i64 = 1;
/// Least verbose debug level.
pub const LOG_LEVEL_MIN_DEBUG: i64 = 2;
/// Most verbose debug level.
pub const LOG_LEVEL_MAX: i64 = 3;

/// Every level a logger may be constructed with.
pub const LOG_LEVELS: RangeInclusive<i64> = LOG_LEVEL_NONE..=LOG_LEVEL_MAX;

/// Caller label used when reporting failures that happen without a usable logger.
pub const RESERVED_TAG: &str = "unilog";

pub const LOG_LEVEL_KEY: &str = "Level";
pub const LOG_FILENAME_KEY: &str = "Filename";
pub const LOG_OVERWRITE_KEY: &str = "Overwrite";

/// Whether `level` is a valid logger verbosity level.
pub fn is_valid_level(level: i64) -> bool {
    LOG_LEVELS.contains(&level)
}

/// Whether `level` may be attached to a general or debug message.
///
/// `LOG_LEVEL_NONE` is a logger setting only; no message can be logged at it.
pub fn is_valid_message_level(level: i64) -> bool {
    level > LOG_LEVEL_NONE && level <= LOG_LEVEL_MAX
}
