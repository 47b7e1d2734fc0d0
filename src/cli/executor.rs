//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and logger setup.

use tracing::debug;

use super::handlers::{CheckCommandHandler, LocateCommandHandler, ShowCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::loader::ConfigLoader;

/// Build the loader the CLI arguments describe
///
/// `--config` replaces whatever path the environment selected.
pub fn loader_for(cli: &Cli) -> anyhow::Result<ConfigLoader> {
    let loader = ConfigLoader::from_env()?;
    Ok(match &cli.config {
        Some(path) => loader.with_config_file(path),
        None => loader,
    })
}

/// Execute a CLI command and return its stdout text
///
/// # Errors
/// Returns configuration errors from the loader or rendering failures.
pub fn execute_command(cli: &Cli) -> anyhow::Result<String> {
    let loader = loader_for(cli)?;
    let command = cli.resolved_command();
    debug!(?command, config_file = %loader.config_file().display(), "Executing command");

    match command {
        Commands::Check => {
            let lines = CheckCommandHandler::new(loader).execute()?;
            Ok(lines.join("\n"))
        }
        Commands::Show {
            format,
            reveal_secrets,
        } => {
            let settings = loader.load()?;
            ShowCommandHandler::new(settings).execute(format, reveal_secrets)
        }
        Commands::Locate => Ok(LocateCommandHandler::new(&loader).execute()),
    }
}
