//! Configuration validation logic
//!
//! Type and range checks on the merged settings. There are no cross-field
//! rules; each sub-configuration validates only its own values. A zero
//! timeout or connection limit means "unlimited" and is accepted.

use crate::config::error::ConfigError;
use crate::config::settings::{DatabaseConfig, HttpConfig, JwtConfig, Settings};

impl HttpConfig {
    /// Validate HTTP configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Host must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::invalid_port("http.port", "0"));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::validation("http.host", "Host cannot be empty."));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::invalid_port("pg.port", "0"));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::validation("pg.host", "Database host cannot be empty."));
        }

        Ok(())
    }
}

impl JwtConfig {
    /// Validate JWT configuration
    ///
    /// The key may be empty; the algorithm may not. The algorithm name is
    /// passed through as supplied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.algo.trim().is_empty() {
            return Err(ConfigError::validation("jwt.algo", "JWT algorithm cannot be empty."));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.http.validate()?;
        self.database.validate()?;
        self.jwt.validate()?;

        if !self.context_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                field: "context".to_string(),
                message: format!(
                    "Context path must start with '/', got '{}'.",
                    self.context_path
                ),
            });
        }

        Ok(())
    }
}
