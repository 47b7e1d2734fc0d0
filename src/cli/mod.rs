//! CLI module for prest-config
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Command execution and validation
//! - Command handlers for check, show and locate

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use executor::execute_command;
pub use parser::{Cli, Commands, OutputFormat};

use crate::logger::{LoggerConfig, init_logger};

/// Initialize logger from the global CLI flags
///
/// # Errors
/// Returns error if logger initialization fails
pub fn init_logger_from_cli(cli: &Cli) -> anyhow::Result<()> {
    init_logger(LoggerConfig::from_verbosity(
        cli.verbose,
        cli.quiet,
        cli.log_format,
    ))
}
