use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// unilog CLI for writing messages through a uniformly configured logger
#[derive(Debug, Parser)]
#[clap(name = "unilog", about = "Write messages through a uniformly configured logger", version, author)]
pub struct Cli {
    /// Verbose diagnostics on stderr (use multiple for increased verbosity)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON file holding the logger configuration
    #[clap(long, conflicts_with_all = ["log_level", "log_file", "overwrite"])]
    pub config: Option<PathBuf>,

    /// Verbosity level of the logger (defaults to the general message level)
    #[clap(long, allow_negative_numbers = true)]
    pub log_level: Option<i64>,

    /// Write to this file instead of the console
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// Whether an existing log file may be replaced
    #[clap(long)]
    pub overwrite: Option<bool>,

    /// The subcommand to execute
    #[clap(subcommand)]
    pub command: Commands,
}

/// unilog CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log a general message
    Log {
        /// Label identifying the source of the message
        #[clap(long)]
        caller: String,

        /// Message to log
        message: String,
    },

    /// Log a debug message
    Debug {
        /// Label identifying the source of the message
        #[clap(long)]
        caller: String,

        /// Debug level relative to the least verbose debug level
        #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
        level: i64,

        /// Message to log
        message: String,
    },

    /// Log a warning
    Warn {
        /// Label identifying the source of the message
        #[clap(long)]
        caller: String,

        /// Warning to log
        message: String,
    },

    /// Log an error and exit with a failure status
    Error {
        /// Label identifying the source of the message
        #[clap(long)]
        caller: String,

        /// Error to log
        message: String,
    },

    /// Log one message on every channel
    Demo {
        /// Label identifying the source of the messages
        #[clap(long)]
        caller: String,
    },

    /// Show the verbosity levels
    Levels,
}
