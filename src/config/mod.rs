//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROBLEM_SOLVER` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use problem_solver::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sheet stored under {}", config.storage.path.display());
//! ```

mod error;
mod export;
mod logging;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Sheet persistence (backend, directory, key)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Report export (download directory, clipboard command)
    #[serde(default)]
    pub export: ExportConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `PROBLEM_SOLVER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROBLEM_SOLVER__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    /// - `PROBLEM_SOLVER__EXPORT__CLIPBOARD_COMMAND=pbcopy` -> `export.clipboard_command = pbcopy`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROBLEM_SOLVER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PROBLEM_SOLVER__STORAGE__BACKEND",
        "PROBLEM_SOLVER__STORAGE__PATH",
        "PROBLEM_SOLVER__STORAGE__KEY",
        "PROBLEM_SOLVER__EXPORT__DOWNLOAD_DIR",
        "PROBLEM_SOLVER__EXPORT__CLIPBOARD_COMMAND",
        "PROBLEM_SOLVER__LOGGING__LEVEL",
        "PROBLEM_SOLVER__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.key, "problem-solver-state");
        assert!(config.export.clipboard_command().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROBLEM_SOLVER__STORAGE__BACKEND", "memory");
        env::set_var("PROBLEM_SOLVER__STORAGE__PATH", "/tmp/sheets");
        env::set_var("PROBLEM_SOLVER__EXPORT__DOWNLOAD_DIR", "/tmp/downloads");
        env::set_var("PROBLEM_SOLVER__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.path, PathBuf::from("/tmp/sheets"));
        assert_eq!(config.export.download_dir, PathBuf::from("/tmp/downloads"));
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROBLEM_SOLVER__STORAGE__BACKEND", "redis");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_key() {
        let config = AppConfig {
            storage: StorageConfig {
                key: "a/b".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStorageKey(_))
        ));
    }
}
