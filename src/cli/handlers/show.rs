//! Show command handler
//!
//! Renders the resolved settings as TOML or JSON.

use anyhow::Context;

use crate::cli::parser::OutputFormat;
use crate::config::settings::Settings;

/// Handler for the show command
pub struct ShowCommandHandler {
    settings: Settings,
}

impl ShowCommandHandler {
    /// Create a new show command handler
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Render the settings, masking secrets unless `reveal_secrets` is set
    pub fn execute(&self, format: OutputFormat, reveal_secrets: bool) -> anyhow::Result<String> {
        let settings = if reveal_secrets {
            self.settings.clone()
        } else {
            self.settings.redacted()
        };

        match format {
            OutputFormat::Toml => {
                toml::to_string_pretty(&settings).context("Failed to render settings as TOML")
            }
            OutputFormat::Json => {
                serde_json::to_string_pretty(&settings).context("Failed to render settings as JSON")
            }
        }
    }
}
