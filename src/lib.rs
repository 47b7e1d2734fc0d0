//! prest-config Library
//!
//! Configuration resolution for the pREST server: defaults, a TOML file and
//! environment variables merged into one validated [`config::Settings`].

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod logger;

pub use config::{ConfigError, Settings};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
