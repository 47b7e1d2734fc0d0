//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::build;
use crate::logger::LogFormat;

/// Resolve and inspect pREST server configuration
#[derive(Parser, Debug)]
#[command(name = "prest-config")]
#[command(about = "Resolve and inspect pREST server configuration")]
#[command(long_about = "
prest-config resolves the configuration a pREST server would run with,
merging built-in defaults, a TOML file and environment variables.

The file is taken from --config, else PREST_CONF, else ./prest.toml.
A missing file is not an error; defaults and environment still apply.

EXAMPLES:
    # Check that the configuration resolves
    prest-config

    # Print the resolved settings as JSON, secrets masked
    prest-config show --format json

    # Use a specific configuration file
    prest-config --config /etc/prest/prest.toml show

    # Print which file would be read
    prest-config locate
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Overrides PREST_CONF. The file must exist and be readable.
    ///
    /// Example: --config /etc/prest/prest.toml
    #[arg(
        short,
        long,
        value_name = "FILE",
        value_parser = super::validation::validate_config_file_path
    )]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Shows which source each configuration value was taken from.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Full)]
    pub log_format: LogFormat,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the configuration and report the result (default)
    ///
    /// Exits non-zero if any source is malformed or a resolved value is
    /// out of range.
    Check,
    /// Print the resolved settings
    ///
    /// Examples:
    ///   prest-config show                    # TOML, secrets masked
    ///   prest-config show --format json      # JSON
    ///   prest-config show --reveal-secrets   # Print passwords and keys as-is
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,

        /// Print passwords, keys and connection URLs unmasked
        #[arg(long)]
        reveal_secrets: bool,
    },
    /// Print the configuration file path that would be read
    Locate,
}

/// Output format for `show`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    #[value(name = "toml")]
    Toml,
    #[value(name = "json")]
    Json,
}

impl Cli {
    /// The subcommand to run, `check` when none was given
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Check)
    }
}
