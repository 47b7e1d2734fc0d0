//! Configuration loader for prest-config
//!
//! This module provides the `ConfigLoader` struct that reads the two
//! configuration sources and hands them to the resolver.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::environment::EnvSource;
use crate::config::error::ConfigError;
use crate::config::file::{FileSettings, FileSource};
use crate::config::locator::locate_config_file;
use crate::config::resolver::Resolver;
use crate::config::settings::Settings;

/// Configuration loader holding one snapshot of its inputs
///
/// The loader supports the following sources (per-field precedence is
/// decided by [`Resolver`]):
/// 1. Built-in defaults
/// 2. The TOML file at `config_file` (optional; a missing file is skipped)
/// 3. Recognised environment variables
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_file: PathBuf,
    /// Environment snapshot
    env: EnvSource,
}

impl ConfigLoader {
    /// Create a loader from the process environment
    ///
    /// The file path comes from `PREST_CONF`, falling back to `./prest.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if a recognised environment variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = EnvSource::from_process()?;
        let config_file = locate_config_file(env.config_file.as_deref());

        Ok(Self { config_file, env })
    }

    /// Create a loader from explicit inputs
    pub fn new(config_file: impl Into<PathBuf>, env: EnvSource) -> Self {
        Self {
            config_file: config_file.into(),
            env,
        }
    }

    /// Replace the configuration file path
    pub fn with_config_file(mut self, config_file: impl Into<PathBuf>) -> Self {
        self.config_file = config_file.into();
        self
    }

    /// Get the configuration file path
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Get the environment snapshot
    pub fn env(&self) -> &EnvSource {
        &self.env
    }

    /// Read the configuration file, treating a missing file as empty
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigFileParse`] if the file exists but is not
    /// valid TOML or has a mistyped value.
    pub fn read_file(&self) -> Result<FileSettings, ConfigError> {
        match FileSource::read(&self.config_file) {
            Ok(file) => {
                info!(path = %self.config_file.display(), "Configuration file loaded");
                Ok(file)
            }
            Err(e) if e.is_recoverable() => {
                warn!(
                    path = %self.config_file.display(),
                    "Configuration file not found, using environment and defaults"
                );
                Ok(FileSettings::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be parsed
    /// - The connection URL is malformed
    /// - A merged value fails validation
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let file = self.read_file()?;
        let settings = Resolver::new(&file, &self.env).resolve()?;

        debug!(
            http_port = settings.http.port,
            pg_host = %settings.database.host,
            pg_database = %settings.database.database,
            "Configuration resolved"
        );

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::vars;
    use crate::config::settings::SslMode;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Global mutex to ensure tests run sequentially to avoid env var conflicts
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to create a temporary config directory with files
    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            let path = temp_dir.path().join(name);
            fs::write(&path, content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Helper to safely set environment variables for a test
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        /// Start with every recognised variable removed
        fn clean() -> Self {
            let mut guard = Self {
                vars_to_restore: Vec::new(),
            };
            for key in vars::ALL {
                guard.remove(key);
            }
            guard
        }

        fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // Restore in reverse so the oldest value wins
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_env_default_path() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::clean();

        let loader = ConfigLoader::from_env().expect("Should create loader");
        assert_eq!(loader.config_file(), Path::new("./prest.toml"));
        assert_eq!(loader.env(), &EnvSource::default());
    }

    #[test]
    fn test_from_env_with_config_file() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();

        env.set("PREST_CONF", "../prest.toml");

        let loader = ConfigLoader::from_env().expect("Should create loader");
        assert_eq!(loader.config_file(), Path::new("../prest.toml"));
    }

    #[test]
    fn test_from_env_malformed_port() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::clean();

        env.set("PORT", "PORT");

        assert!(matches!(
            ConfigLoader::from_env(),
            Err(ConfigError::InvalidPort { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = setup_config_dir(&[]);
        let loader = ConfigLoader::new(temp_dir.path().join("prest.toml"), EnvSource::default());

        let settings = loader.load().expect("missing file is not fatal");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_malformed_file_is_fatal() {
        let temp_dir = setup_config_dir(&[("prest.toml", "[http\n")]);
        let loader = ConfigLoader::new(temp_dir.path().join("prest.toml"), EnvSource::default());

        assert!(matches!(
            loader.load(),
            Err(ConfigError::ConfigFileParse { .. })
        ));
    }

    #[test]
    fn test_load_file_then_env_override() {
        let temp_dir = setup_config_dir(&[(
            "prest.toml",
            r#"
[http]
port = 6000

[pg]
host = "db.internal"
database = "app"

[ssl]
mode = "disable"
"#,
        )]);

        let env = EnvSource {
            http_port: Some(7000),
            pg_database: Some("override".to_string()),
            ..Default::default()
        };
        let loader = ConfigLoader::new(temp_dir.path().join("prest.toml"), env);
        let settings = loader.load().expect("Should load settings");

        assert_eq!(settings.http.port, 7000);
        assert_eq!(settings.database.host, "db.internal");
        assert_eq!(settings.database.database, "override");
        assert_eq!(settings.database.ssl_mode, SslMode::Disable);
    }

    #[test]
    fn test_with_config_file_replaces_path() {
        let temp_dir = setup_config_dir(&[("other.toml", "[http]\ntimeout = 5\n")]);
        let loader = ConfigLoader::new("./prest.toml", EnvSource::default())
            .with_config_file(temp_dir.path().join("other.toml"));

        assert_eq!(loader.config_file(), temp_dir.path().join("other.toml"));
        assert_eq!(loader.load().unwrap().http.timeout, 5);
    }

    #[test]
    fn test_load_is_repeatable() {
        let temp_dir = setup_config_dir(&[("prest.toml", "[jwt]\nkey = \"k\"\n")]);
        let loader = ConfigLoader::new(temp_dir.path().join("prest.toml"), EnvSource::default());

        assert_eq!(loader.load().unwrap(), loader.load().unwrap());
    }
}
