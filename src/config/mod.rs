//! Configuration management module for prest-config
//!
//! This module resolves the runtime configuration of a pREST server from:
//! - Built-in defaults
//! - A TOML configuration file (`PREST_CONF`, else `./prest.toml`)
//! - Environment variable overrides
//! - PostgreSQL connection URLs (`PREST_PG_URL`, `DATABASE_URL`)
//!
//! # Entry points
//! - [`parse`] returns a fresh [`Settings`] and touches no shared state.
//! - [`load`] does the same and publishes the result; [`current`] reads it.
//!
//! Precedence rules live in [`resolver`].

pub mod database_url;
pub mod defaults;
pub mod environment;
pub mod error;
pub mod file;
pub mod loader;
pub mod locator;
pub mod resolver;
pub mod settings;
pub mod validation;

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwapOption;

// Re-export public types
pub use database_url::DatabaseUrl;
pub use environment::EnvSource;
pub use error::ConfigError;
pub use file::{FileSettings, FileSource};
pub use loader::ConfigLoader;
pub use locator::{CONFIG_FILE_ENV, DEFAULT_CONFIG_PATH, locate_config_file};
pub use resolver::{Resolver, Source};
pub use settings::{
    AccessConfig, AuthConfig, AuthType, DatabaseConfig, ExposeConfig, HttpConfig, JwtConfig,
    PasswordHash, Permission, Settings, SslMode, TablePermission,
};

/// Settings published by the last successful [`load`]
static CURRENT: LazyLock<ArcSwapOption<Settings>> = LazyLock::new(ArcSwapOption::empty);

/// Resolve configuration from the process environment and the located file
///
/// # Errors
///
/// Returns the first [`ConfigError`] met while reading or merging sources.
pub fn parse() -> Result<Settings, ConfigError> {
    ConfigLoader::from_env()?.load()
}

/// Resolve configuration and publish it process-wide
///
/// Each call replaces the published settings wholesale. On error the
/// previous value stays in place.
pub fn load() -> Result<Arc<Settings>, ConfigError> {
    let settings = Arc::new(parse()?);
    CURRENT.store(Some(Arc::clone(&settings)));
    Ok(settings)
}

/// Settings published by the last successful [`load`], if any
pub fn current() -> Option<Arc<Settings>> {
    CURRENT.load_full()
}
