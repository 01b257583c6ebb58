//! Main entry point for the unilog command line tool.
//!
//! This module parses command line arguments, initializes diagnostic logging, builds the
//! configured logger, and dispatches commands to the corresponding handlers.
//!
//! # Details
//! Every failure is reported by unilog itself (through the configured logger or its throwaway
//! reporter) before it reaches main, which therefore only sets the exit status.

mod cli;
mod commands;
mod utils;

use cli::{Cli, Commands};
use commands::{config, emit, levels};
use unilog::create_logger;
use unilog::error::Result;

use clap::Parser;
use log::debug;

/// Entry point of the application.
fn main() {
    // Parse command line arguments.
    let cli = Cli::parse();
    utils::init_logger(cli.verbose);

    // Run the application logic; errors have already been reported.
    if let Err(e) = run(cli) {
        debug!("Exiting after error: {}", e);
        std::process::exit(1);
    }
}

/// Runs the application logic based on the parsed CLI arguments.
///
/// # Arguments
///
/// * `cli` - A struct containing the parsed command line arguments.
///
/// # Returns
///
/// * `Result<()>` - Returns Ok on success, or an error on failure.
fn run(cli: Cli) -> Result<()> {
    if let Commands::Levels = cli.command {
        levels::handle_levels();
        return Ok(());
    }

    let configuration = config::resolve_configuration(
        cli.config.as_deref(),
        cli.log_level,
        cli.log_file.as_deref(),
        cli.overwrite,
    )?;
    let logger = create_logger(configuration.as_ref())?;
    let logger = logger.as_ref();

    // Dispatch based on the user's command.
    match cli.command {
        Commands::Log { caller, message } => emit::handle_log(logger, &caller, &message),
        Commands::Debug {
            caller,
            level,
            message,
        } => emit::handle_debug(logger, &caller, level, &message),
        Commands::Warn { caller, message } => emit::handle_warn(logger, &caller, &message),
        Commands::Error { caller, message } => emit::handle_error(logger, &caller, &message),
        Commands::Demo { caller } => emit::handle_demo(logger, &caller),
        Commands::Levels => {
            // Already handled above.
            Ok(())
        }
    }
}
