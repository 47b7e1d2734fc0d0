//! Environment variable source
//!
//! Only the variables listed in [`vars`] are read. Values are type-checked
//! here, so a malformed port aborts before any precedence is applied. Values
//! are trimmed, and an empty value counts as unset.

use std::collections::HashMap;

use crate::config::error::ConfigError;
use crate::config::settings::SslMode;

/// Recognised environment variable names
pub mod vars {
    /// Generic port variable set by most PaaS platforms
    pub const PORT: &str = "PORT";
    pub const HTTP_PORT: &str = "PREST_HTTP_PORT";
    pub const HTTP_HOST: &str = "PREST_HTTP_HOST";
    pub const HTTP_TIMEOUT: &str = "PREST_HTTP_TIMEOUT";
    pub const PG_URL: &str = "PREST_PG_URL";
    /// Generic database URL set by cloud providers
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const PG_HOST: &str = "PREST_PG_HOST";
    pub const PG_PORT: &str = "PREST_PG_PORT";
    pub const PG_USER: &str = "PREST_PG_USER";
    pub const PG_PASS: &str = "PREST_PG_PASS";
    pub const PG_DATABASE: &str = "PREST_PG_DATABASE";
    pub const SSL_MODE: &str = "PREST_SSL_MODE";
    pub const JWT_KEY: &str = "PREST_JWT_KEY";
    pub const JWT_ALGO: &str = "PREST_JWT_ALGO";
    pub const JWT_DEFAULT: &str = "PREST_JWT_DEFAULT";
    pub const DEBUG: &str = "PREST_DEBUG";
    pub const CONF: &str = crate::config::locator::CONFIG_FILE_ENV;

    /// Every name above, in declaration order
    pub const ALL: &[&str] = &[
        PORT,
        HTTP_PORT,
        HTTP_HOST,
        HTTP_TIMEOUT,
        PG_URL,
        DATABASE_URL,
        PG_HOST,
        PG_PORT,
        PG_USER,
        PG_PASS,
        PG_DATABASE,
        SSL_MODE,
        JWT_KEY,
        JWT_ALGO,
        JWT_DEFAULT,
        DEBUG,
        CONF,
    ];
}

const TRUE_VALUES: &[&str] = &["1", "t", "true", "yes", "on"];
const FALSE_VALUES: &[&str] = &["0", "f", "false", "no", "off"];

/// Values taken from the environment; `None` means the variable was unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSource {
    /// `PORT`
    pub port: Option<u16>,
    /// `PREST_HTTP_PORT`
    pub http_port: Option<u16>,
    pub http_host: Option<String>,
    pub http_timeout: Option<u64>,
    /// `PREST_PG_URL`
    pub pg_url: Option<String>,
    /// `DATABASE_URL`
    pub database_url: Option<String>,
    pub pg_host: Option<String>,
    pub pg_port: Option<u16>,
    pub pg_user: Option<String>,
    pub pg_pass: Option<String>,
    pub pg_database: Option<String>,
    pub ssl_mode: Option<SslMode>,
    pub jwt_key: Option<String>,
    pub jwt_algo: Option<String>,
    /// Tri-state: set true, set false, or unset
    pub jwt_default: Option<bool>,
    pub debug: Option<bool>,
    /// `PREST_CONF`
    pub config_file: Option<String>,
}

impl EnvSource {
    /// Read the recognised variables from the process environment
    pub fn from_process() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the recognised variables from an explicit map
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| values.get(name).cloned())
    }

    /// Read the recognised variables through `lookup`
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidPort`] for a port variable that is not 1-65535
    /// - [`ConfigError::InvalidValue`] for a malformed boolean, number or SSL mode
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Ok(Self {
            port: get(vars::PORT).map(|v| parse_port(vars::PORT, &v)).transpose()?,
            http_port: get(vars::HTTP_PORT)
                .map(|v| parse_port(vars::HTTP_PORT, &v))
                .transpose()?,
            http_host: get(vars::HTTP_HOST),
            http_timeout: get(vars::HTTP_TIMEOUT)
                .map(|v| parse_seconds(vars::HTTP_TIMEOUT, &v))
                .transpose()?,
            pg_url: get(vars::PG_URL),
            database_url: get(vars::DATABASE_URL),
            pg_host: get(vars::PG_HOST),
            pg_port: get(vars::PG_PORT)
                .map(|v| parse_port(vars::PG_PORT, &v))
                .transpose()?,
            pg_user: get(vars::PG_USER),
            pg_pass: get(vars::PG_PASS),
            pg_database: get(vars::PG_DATABASE),
            ssl_mode: get(vars::SSL_MODE)
                .map(|v| {
                    v.parse::<SslMode>().map_err(|_| {
                        ConfigError::invalid_value(
                            vars::SSL_MODE,
                            v.as_str(),
                            SslMode::VARIANTS.join(", "),
                        )
                    })
                })
                .transpose()?,
            jwt_key: get(vars::JWT_KEY),
            jwt_algo: get(vars::JWT_ALGO),
            jwt_default: get(vars::JWT_DEFAULT)
                .map(|v| parse_bool(vars::JWT_DEFAULT, &v))
                .transpose()?,
            debug: get(vars::DEBUG)
                .map(|v| parse_bool(vars::DEBUG, &v))
                .transpose()?,
            config_file: get(vars::CONF),
        })
    }
}

/// Parse a port number, rejecting 0 and anything outside u16
pub fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::invalid_port(key, value)),
    }
}

/// Parse a boolean flag
///
/// Accepts `1/t/true/yes/on` and `0/f/false/no/off`, case-insensitively.
pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    let normalized = value.trim().to_lowercase();
    if TRUE_VALUES.contains(&normalized.as_str()) {
        Ok(true)
    } else if FALSE_VALUES.contains(&normalized.as_str()) {
        Ok(false)
    } else {
        Err(ConfigError::invalid_value(
            key,
            value,
            "a boolean (true/false, 1/0, yes/no, on/off)",
        ))
    }
}

fn parse_seconds(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::invalid_value(key, value, "a whole number of seconds"))
}
