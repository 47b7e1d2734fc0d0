//! Locate command handler

use crate::config::loader::ConfigLoader;

/// Handler for the locate command
pub struct LocateCommandHandler<'a> {
    loader: &'a ConfigLoader,
}

impl<'a> LocateCommandHandler<'a> {
    pub fn new(loader: &'a ConfigLoader) -> Self {
        Self { loader }
    }

    /// The selected path, suffixed with a note when the file is absent
    pub fn execute(&self) -> String {
        let path = self.loader.config_file();
        if path.is_file() {
            path.display().to_string()
        } else {
            format!("{} (not found)", path.display())
        }
    }
}
