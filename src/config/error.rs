//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A port value that is not an integer in 1..=65535
    #[error("Invalid port in {source_name}: '{value}' (expected an integer between 1 and 65535)")]
    InvalidPort {
        /// Where the value came from (environment variable, file key or URL)
        source_name: String,
        /// The offending raw value
        value: String,
    },

    /// Configuration file exists but could not be parsed into the schema
    #[error("Failed to parse configuration file '{}': {message}", path.display())]
    ConfigFileParse {
        /// Path of the file that failed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Configuration file not found; the loader recovers from this one
    #[error("Configuration file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),

    /// A field that has no default was not supplied by any source
    #[error("Missing required configuration field: {0}")]
    MissingRequiredField(String),

    /// A value was present but not one of the accepted forms
    #[error("Invalid value for {key}: '{value}' (expected {expected})")]
    InvalidValue {
        /// Key or variable name
        key: String,
        /// The offending raw value
        value: String,
        /// Human readable description of accepted values
        expected: String,
    },

    /// Database connection URL could not be parsed
    #[error("Invalid database URL: {message}")]
    InvalidDatabaseUrl {
        /// Parser message
        message: String,
    },

    /// Validation error with field and message
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// The validation error message
        message: String,
    },
}

impl ConfigError {
    /// Create a new invalid port error
    pub fn invalid_port<S: Into<String>, V: Into<String>>(source_name: S, value: V) -> Self {
        ConfigError::InvalidPort {
            source_name: source_name.into(),
            value: value.into(),
        }
    }

    /// Create a new invalid value error
    pub fn invalid_value<K, V, E>(key: K, value: V, expected: E) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        E: Into<String>,
    {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new file parse error
    pub fn file_parse<P: Into<PathBuf>, S: ToString>(path: P, message: S) -> Self {
        ConfigError::ConfigFileParse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a new database URL error
    pub fn database_url<S: Into<String>>(message: S) -> Self {
        ConfigError::InvalidDatabaseUrl {
            message: message.into(),
        }
    }

    /// Whether resolution may continue past this error.
    ///
    /// Only a missing configuration file is recoverable; everything else
    /// aborts the resolution attempt.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConfigError::ConfigFileNotFound(_))
    }
}
