//! Resolved configuration structures for prest
//!
//! This module defines the fully populated configuration object produced by
//! the resolver. Every field has a value; defaults come from
//! [`defaults`](crate::config::defaults).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{self, owned_list};
use crate::config::error::ConfigError;

/// Placeholder shown instead of secret values
const REDACTED: &str = "******";

// ============================================================================
// Enumerated values
// ============================================================================

/// PostgreSQL `sslmode` connection parameter
///
/// Deserialization goes through [`FromStr`], so every source accepts the
/// same case-insensitive spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum SslMode {
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    /// All accepted spellings, for error messages
    pub const VARIANTS: &'static [&'static str] = &[
        "disable",
        "allow",
        "prefer",
        "require",
        "verify-ca",
        "verify-full",
    ];

    /// Convert the mode to its connection-string spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl Default for SslMode {
    fn default() -> Self {
        defaults::SSL_MODE
    }
}

impl FromStr for SslMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            _ => Err(ConfigError::invalid_value(
                "sslmode",
                s,
                format!("one of: {}", Self::VARIANTS.join(", ")),
            )),
        }
    }
}

impl TryFrom<String> for SslMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hash applied to passwords stored in the auth table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum PasswordHash {
    Md5,
    Sha1,
}

impl PasswordHash {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordHash::Md5 => "MD5",
            PasswordHash::Sha1 => "SHA1",
        }
    }
}

impl Default for PasswordHash {
    fn default() -> Self {
        defaults::AUTH_ENCRYPT
    }
}

impl FromStr for PasswordHash {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MD5" => Ok(PasswordHash::Md5),
            "SHA1" => Ok(PasswordHash::Sha1),
            _ => Err(ConfigError::invalid_value("auth.encrypt", s, "MD5 or SHA1")),
        }
    }
}

impl TryFrom<String> for PasswordHash {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the auth endpoint reads credentials from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// JSON request body
    Body,
    /// HTTP basic auth header
    Basic,
}

impl Default for AuthType {
    fn default() -> Self {
        defaults::AUTH_TYPE
    }
}

/// Operation allowed on a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Delete,
}

/// Access rule for a single table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePermission {
    /// Table name
    pub name: String,

    /// Operations permitted on the table
    #[serde(default)]
    pub permissions: Vec<Permission>,

    /// Columns that may be returned; empty means all
    #[serde(default)]
    pub fields: Vec<String>,
}

impl TablePermission {
    /// Whether `permission` is granted on this table
    pub fn allows(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

// ============================================================================
// HTTP Configuration
// ============================================================================

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: String,

    /// Listen port (1-65535)
    pub port: u16,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl HttpConfig {
    /// Get the full listen address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: defaults::HTTP_HOST.to_string(),
            port: defaults::HTTP_PORT,
            timeout: defaults::HTTP_TIMEOUT,
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// PostgreSQL connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub database: String,
    pub ssl_mode: SslMode,

    /// Raw connection URL, when one determined the connection fields
    pub url: Option<String>,

    pub ssl_cert: Option<String>,
    pub ssl_key: Option<String>,
    pub ssl_root_cert: Option<String>,

    /// Maximum idle connections kept in the pool
    pub max_idle_conn: u32,

    /// Maximum open connections
    pub max_open_conn: u32,

    /// Connection timeout in seconds
    pub conn_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: defaults::PG_HOST.to_string(),
            port: defaults::PG_PORT,
            user: defaults::PG_USER.to_string(),
            pass: defaults::PG_PASS.to_string(),
            database: defaults::PG_DATABASE.to_string(),
            ssl_mode: SslMode::default(),
            url: None,
            ssl_cert: None,
            ssl_key: None,
            ssl_root_cert: None,
            max_idle_conn: defaults::PG_MAX_IDLE_CONN,
            max_open_conn: defaults::PG_MAX_OPEN_CONN,
            conn_timeout: defaults::PG_CONN_TIMEOUT,
        }
    }
}

// ============================================================================
// JWT Configuration
// ============================================================================

/// JWT authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Signing key; empty disables JWT verification
    pub key: String,

    /// Signing algorithm name, never empty
    pub algo: String,

    /// Whether the built-in JWT middleware is enabled
    pub enable_default: bool,

    /// Paths that skip JWT verification
    pub whitelist: Vec<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            key: defaults::JWT_KEY.to_string(),
            algo: defaults::JWT_ALGO.to_string(),
            enable_default: defaults::JWT_ENABLE_DEFAULT,
            whitelist: owned_list(defaults::JWT_WHITELIST),
        }
    }
}

// ============================================================================
// Auth Configuration
// ============================================================================

/// Table-backed user authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    pub schema: String,
    pub table: String,

    /// Username column
    pub username: String,

    /// Password column
    pub password: String,

    pub encrypt: PasswordHash,

    #[serde(rename = "type")]
    pub auth_type: AuthType,

    /// Extra user columns returned in the token, in declared order
    pub metadata: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::AUTH_ENABLED,
            schema: defaults::AUTH_SCHEMA.to_string(),
            table: defaults::AUTH_TABLE.to_string(),
            username: defaults::AUTH_USERNAME.to_string(),
            password: defaults::AUTH_PASSWORD.to_string(),
            encrypt: PasswordHash::default(),
            auth_type: AuthType::default(),
            metadata: owned_list(defaults::AUTH_METADATA),
        }
    }
}

// ============================================================================
// Access / Expose Configuration
// ============================================================================

/// Table access control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Only tables listed in `tables` are reachable
    pub restrict: bool,
    pub ignore_table: Vec<String>,
    pub tables: Vec<TablePermission>,
}

impl AccessConfig {
    /// Look up the rule for a table by name
    pub fn table(&self, name: &str) -> Option<&TablePermission> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Whether a table is excluded from listings and queries
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_table.iter().any(|t| t == name)
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            restrict: defaults::ACCESS_RESTRICT,
            ignore_table: Vec::new(),
            tables: Vec::new(),
        }
    }
}

/// Which catalog listings the service exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposeConfig {
    pub enabled: bool,
    pub database_listing: bool,
    pub schema_listing: bool,
    pub table_listing: bool,
}

impl Default for ExposeConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::EXPOSE_ENABLED,
            database_listing: defaults::EXPOSE_DATABASE_LISTING,
            schema_listing: defaults::EXPOSE_SCHEMA_LISTING,
            table_listing: defaults::EXPOSE_TABLE_LISTING,
        }
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete resolved configuration
///
/// Built fresh by every resolution; never patched in place afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub debug: bool,
    pub context_path: String,
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub auth: AuthConfig,
    pub access: AccessConfig,
    pub expose: ExposeConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: defaults::DEBUG,
            context_path: defaults::CONTEXT_PATH.to_string(),
            http: HttpConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            auth: AuthConfig::default(),
            access: AccessConfig::default(),
            expose: ExposeConfig::default(),
        }
    }
}

impl Settings {
    /// Copy of the settings with secrets masked, for display
    pub fn redacted(&self) -> Settings {
        let mut copy = self.clone();
        mask(&mut copy.database.pass);
        mask(&mut copy.jwt.key);
        if let Some(url) = copy.database.url.as_mut() {
            mask(url);
        }
        copy
    }
}

fn mask(value: &mut String) {
    if !value.is_empty() {
        *value = REDACTED.to_string();
    }
}
