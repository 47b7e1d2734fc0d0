//! Selection of the configuration file path

use std::path::PathBuf;

/// Environment variable naming an explicit configuration file
pub const CONFIG_FILE_ENV: &str = "PREST_CONF";

/// Path used when no explicit configuration file is given
pub const DEFAULT_CONFIG_PATH: &str = "./prest.toml";

/// Return the configuration file to read.
///
/// An explicit, non-empty path always wins; otherwise `./prest.toml`.
pub fn locate_config_file(explicit: Option<&str>) -> PathBuf {
    match explicit.map(str::trim) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}
