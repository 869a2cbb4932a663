//! In-Memory State Store Adapter
//!
//! Keeps values in a shared map. Used for tests and for
//! `storage.backend = "memory"` sessions that should not touch disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{validate_key, StateStore, StateStoreError};

/// In-memory key-value store
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStateStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.values.write().await.clear();
    }

    /// Get the number of stored values
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StateStoreError> {
        validate_key(key)?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StateStoreError> {
        validate_key(key)?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StateStoreError> {
        validate_key(key)?;
        Ok(self.values.read().await.contains_key(key))
    }

    async fn remove(&self, key: &str) -> Result<(), StateStoreError> {
        validate_key(key)?;
        self.values.write().await.remove(key);
        Ok(())
    }
}
