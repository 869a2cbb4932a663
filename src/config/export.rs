//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Report export targets
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory downloaded reports are saved to
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,

    /// Command the report is piped into for "copy to clipboard"
    /// (e.g. `xclip -selection clipboard`, `pbcopy`)
    pub clipboard_command: Option<String>,
}

impl ExportConfig {
    /// Clipboard command, if one is set and not blank
    pub fn clipboard_command(&self) -> Option<&str> {
        self.clipboard_command
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.download_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("export.download_dir"));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            download_dir: default_download_dir(),
            clipboard_command: None,
        }
    }
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}
