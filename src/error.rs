//! Module for unilog error types.
//!
//! This module defines the error taxonomy shared by the loggers, the logger factory and the
//! bound log functions, together with a convenient Result type alias.
//!
//! # Details
//! Construction and factory failures are reported through a throwaway console logger before
//! one of these values reaches the caller, so the Display text doubles as the logged message.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for unilog
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Invalid logging level ({0})")]
    InvalidLevel(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    InvalidValue(String),

    #[error("{0} logger configuration not provided")]
    MissingField(String),

    #[error("Unexpected logger configuration keys ({0})")]
    UnexpectedField(String),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Cannot overwrite {} since it is not a file", .0.display())]
    PathConflict(PathBuf),

    #[error("Operation aborted: {0}")]
    Aborted(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias to simplify function signatures
pub type Result<T> = std::result::Result<T, LogError>;
