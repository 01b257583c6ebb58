//! Uniform logging for a family of command line tools.
//!
//! Every tool obtains a [`Logger`] from [`create_logger`], derives a set of [`LogFunctions`]
//! per component with [`create_log_functions`], and writes all general, debug, warning and
//! error messages through them.
//!
//! # Details
//! Lines have a fixed format: `[caller] message` for general and debug messages,
//! `[caller] WARNING - message` for warnings and `[caller] ERROR - message` for errors.
//! General and debug messages are gated by the logger's verbosity level; warnings and errors
//! never are.

pub mod configuration;
pub mod constants;
pub mod error;
pub mod functions;
pub mod logger;

pub use configuration::{LoggerConfig, create_logger};
pub use constants::{
    LOG_LEVEL_DEFAULT, LOG_LEVEL_MAX, LOG_LEVEL_MIN_DEBUG, LOG_LEVEL_NONE, LOG_LEVELS,
};
pub use error::{LogError, Result};
pub use functions::{LogFunctions, create_log_functions};
pub use logger::{ConsoleLogger, FileLogger, Logger, report_error, report_warning};
