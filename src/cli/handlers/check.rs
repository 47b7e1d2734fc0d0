//! Check command handler
//!
//! Resolves the configuration and summarises the result.

use crate::config::error::ConfigError;
use crate::config::loader::ConfigLoader;
use crate::config::settings::Settings;

/// Handler for the check command
pub struct CheckCommandHandler {
    loader: ConfigLoader,
}

impl CheckCommandHandler {
    /// Create a new check command handler
    pub fn new(loader: ConfigLoader) -> Self {
        Self { loader }
    }

    /// Resolve the configuration and return the report lines
    ///
    /// # Errors
    /// Returns the resolution error unchanged.
    pub fn execute(&self) -> Result<Vec<String>, ConfigError> {
        let settings = self.loader.load()?;
        Ok(self.report(&settings))
    }

    fn report(&self, settings: &Settings) -> Vec<String> {
        let db = &settings.database;
        let file_state = if self.loader.config_file().is_file() {
            "read"
        } else {
            "not found, skipped"
        };

        vec![
            "✓ Configuration is valid".to_string(),
            format!(
                "✓ Configuration file: {} ({})",
                self.loader.config_file().display(),
                file_state
            ),
            format!("✓ Server would bind to: {}", settings.http.address()),
            format!(
                "✓ Database: {}:{}/{} (sslmode={})",
                db.host, db.port, db.database, db.ssl_mode
            ),
            format!(
                "✓ JWT: algorithm {}, default middleware {}",
                settings.jwt.algo,
                if settings.jwt.enable_default { "on" } else { "off" }
            ),
        ]
    }
}
