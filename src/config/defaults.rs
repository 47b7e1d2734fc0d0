//! Built-in fallback values
//!
//! Every field of [`Settings`](crate::config::Settings) has an entry here.
//! The `Default` impls in `settings` read from this table, so
//! `Settings::default()` is the defaults source of the resolver.

use crate::config::settings::{AuthType, PasswordHash, SslMode};

pub const HTTP_HOST: &str = "0.0.0.0";
pub const HTTP_PORT: u16 = 3000;
pub const HTTP_TIMEOUT: u64 = 60;

pub const PG_HOST: &str = "127.0.0.1";
pub const PG_PORT: u16 = 5432;
pub const PG_USER: &str = "";
pub const PG_PASS: &str = "";
pub const PG_DATABASE: &str = "prest";
pub const PG_MAX_IDLE_CONN: u32 = 10;
pub const PG_MAX_OPEN_CONN: u32 = 10;
pub const PG_CONN_TIMEOUT: u64 = 10;

/// SSL mode used when neither the file nor the environment names one
pub const SSL_MODE: SslMode = SslMode::Require;

/// SSL mode assumed for a connection URL without a `sslmode` query parameter
pub const URL_SSL_MODE: SslMode = SslMode::Require;

pub const JWT_KEY: &str = "";
pub const JWT_ALGO: &str = "HS256";
pub const JWT_ENABLE_DEFAULT: bool = true;
pub const JWT_WHITELIST: &[&str] = &["/auth"];

pub const AUTH_ENABLED: bool = false;
pub const AUTH_SCHEMA: &str = "public";
pub const AUTH_TABLE: &str = "prest_users";
pub const AUTH_USERNAME: &str = "username";
pub const AUTH_PASSWORD: &str = "password";
pub const AUTH_ENCRYPT: PasswordHash = PasswordHash::Md5;
pub const AUTH_TYPE: AuthType = AuthType::Body;
pub const AUTH_METADATA: &[&str] = &["first_name", "last_name", "last_login"];

pub const ACCESS_RESTRICT: bool = false;

pub const EXPOSE_ENABLED: bool = false;
pub const EXPOSE_DATABASE_LISTING: bool = false;
pub const EXPOSE_SCHEMA_LISTING: bool = false;
pub const EXPOSE_TABLE_LISTING: bool = false;

pub const DEBUG: bool = false;
pub const CONTEXT_PATH: &str = "/";

/// Convert a static string list into owned strings
pub(crate) fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
