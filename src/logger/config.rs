//! Configuration types for the logger

use tracing::Level;

use crate::logger::error::LoggerError;

/// Main logger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Level name or full `EnvFilter` directive
    pub level: String,
    pub format: LogFormat,
    pub colored: bool,
}

impl LoggerConfig {
    /// Map the CLI verbosity flags to a level
    ///
    /// `quiet` wins over `verbose`.
    pub fn from_verbosity(verbose: bool, quiet: bool, format: LogFormat) -> Self {
        let level = match (verbose, quiet) {
            (_, true) => "error",
            (true, false) => "debug",
            (false, false) => "warn",
        };

        Self {
            level: level.to_string(),
            format,
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// A bare level name is checked strictly; anything with `=` or `,` is
    /// treated as a filter directive and left to `EnvFilter`.
    pub fn validate(&self) -> Result<(), LoggerError> {
        if self.level.contains(['=', ',']) {
            return Ok(());
        }
        self.parse_level().map(|_| ())
    }

    /// Parse the log level string into a tracing::Level
    pub fn parse_level(&self) -> Result<Level, LoggerError> {
        match self.level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => Err(LoggerError::config(format!(
                "Invalid log level '{}'. Valid levels are: trace, debug, info, warn, error",
                self.level
            ))),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            colored: true,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}
