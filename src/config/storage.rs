//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::STATE_KEY;
use crate::ports::validate_key;

/// Where the sheet is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Key the sheet is stored under
    #[serde(default = "default_key")]
    pub key: String,
}

/// Storage backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.path"));
        }
        validate_key(&self.key).map_err(|_| ValidationError::InvalidStorageKey(self.key.clone()))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
            key: default_key(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(".problem-solver")
}

fn default_key() -> String {
    STATE_KEY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.path, PathBuf::from(".problem-solver"));
        assert_eq!(config.key, "problem-solver-state");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_backend_needs_path() {
        let config = StorageConfig {
            path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.path"))
        );
    }

    #[test]
    fn test_memory_backend_ignores_path() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            path: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_path_like_key() {
        let config = StorageConfig {
            key: "../state".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStorageKey(_))
        ));
    }
}
