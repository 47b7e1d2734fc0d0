//! Configuration file source
//!
//! Reads a TOML file through the `config` crate into [`FileSettings`], a
//! typed mirror of the file layout where every leaf is optional. Type errors
//! surface here rather than later in the resolver.

use std::path::Path;

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::config::error::ConfigError;
use crate::config::settings::{AuthType, PasswordHash, SslMode, TablePermission};

/// `[http]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HttpSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub timeout: Option<u64>,
}

/// `[pg]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PgSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub database: Option<String>,
    pub url: Option<String>,
    pub maxidleconn: Option<u32>,
    pub maxopenconn: Option<u32>,
    pub conntimeout: Option<u64>,
}

/// `[ssl]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SslSection {
    pub mode: Option<SslMode>,
    pub sslcert: Option<String>,
    pub sslkey: Option<String>,
    pub sslrootcert: Option<String>,
}

/// `[jwt]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JwtSection {
    pub key: Option<String>,
    pub algo: Option<String>,
    pub default: Option<bool>,
    pub whitelist: Option<Vec<String>>,
}

/// `[auth]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthSection {
    pub enabled: Option<bool>,
    pub schema: Option<String>,
    pub table: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub encrypt: Option<PasswordHash>,
    #[serde(rename = "type")]
    pub auth_type: Option<AuthType>,
    pub metadata: Option<Vec<String>>,
}

/// `[access]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccessSection {
    pub restrict: Option<bool>,
    pub tables: Option<Vec<TablePermission>>,
    pub ignore_table: Option<Vec<String>>,
}

/// `[expose]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExposeSection {
    pub enabled: Option<bool>,
    pub databases: Option<bool>,
    pub schemas: Option<bool>,
    pub tables: Option<bool>,
}

/// Everything a configuration file may declare
///
/// `FileSettings::default()` is the empty file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileSettings {
    pub debug: Option<bool>,
    pub context: Option<String>,
    #[serde(default)]
    pub http: HttpSection,
    #[serde(default)]
    pub pg: PgSection,
    #[serde(default)]
    pub ssl: SslSection,
    #[serde(default)]
    pub jwt: JwtSection,
    #[serde(default)]
    pub auth: AuthSection,
    #[serde(default)]
    pub access: AccessSection,
    #[serde(default)]
    pub expose: ExposeSection,
}

/// Reader for the TOML configuration file
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FileSource {
    /// Read and type-check the file at `path`
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ConfigFileNotFound`] if `path` is not a readable file
    /// - [`ConfigError::ConfigFileParse`] if the content is not valid TOML or
    ///   a value has the wrong type
    pub fn read(path: &Path) -> Result<FileSettings, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::ConfigFileNotFound(path.to_path_buf()));
        }

        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()
            .map_err(|e| ConfigError::file_parse(path, e))?;

        Self::deserialize(config, path)
    }

    /// Type-check TOML text as if it had been read from `origin`
    pub fn parse_str(contents: &str, origin: &Path) -> Result<FileSettings, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::file_parse(origin, e))?;

        Self::deserialize(config, origin)
    }

    fn deserialize(config: Config, origin: &Path) -> Result<FileSettings, ConfigError> {
        config.try_deserialize::<FileSettings>().map_err(|e| {
            ConfigError::file_parse(origin, format!("Failed to deserialize configuration: {}", e))
        })
    }
}
