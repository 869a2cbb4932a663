//! State Store Port - Interface for persisting the serialized sheet.
//!
//! A plain key-value contract: values are opaque strings, so serialization
//! stays with the caller and adapters only move bytes.

use async_trait::async_trait;

/// Errors that can occur during state store operations
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Port for a durable key-value store
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the value stored under `key`
    ///
    /// # Returns
    /// `None` if nothing has been stored under the key
    ///
    /// # Errors
    /// Returns `StateStoreError` if the store cannot be read
    async fn load(&self, key: &str) -> Result<Option<String>, StateStoreError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `StateStoreError` if the write fails
    async fn save(&self, key: &str, value: &str) -> Result<(), StateStoreError>;

    /// Check if a value exists under `key`
    async fn exists(&self, key: &str) -> Result<bool, StateStoreError>;

    /// Delete the value under `key`; deleting a missing key is not an error
    async fn remove(&self, key: &str) -> Result<(), StateStoreError>;
}

/// Rejects keys that could escape a directory or are empty.
pub fn validate_key(key: &str) -> Result<(), StateStoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StateStoreError::InvalidKey(key.to_string()))
    }
}
