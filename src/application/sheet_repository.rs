//! SheetRepository - reads and writes the sheet through the StateStore port.
//!
//! The sheet is stored as one JSON document under a fixed key. Reading never
//! fails: anything other than a well-formed document yields the initial
//! sheet.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::sheet::WizardState;
use crate::ports::{StateStore, StateStoreError};

/// Key under which the sheet is stored.
pub const STATE_KEY: &str = "problem-solver-state";

/// Errors from writing the sheet.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StateStoreError),
}

/// Typed access to the persisted sheet.
#[derive(Clone)]
pub struct SheetRepository {
    store: Arc<dyn StateStore>,
    key: String,
}

impl SheetRepository {
    /// Repository using the default key.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self::with_key(store, STATE_KEY)
    }

    pub fn with_key(store: Arc<dyn StateStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored sheet, or the initial sheet when there is none or it
    /// cannot be read or parsed.
    pub async fn load(&self) -> WizardState {
        let raw = match self.store.load(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored sheet, starting fresh");
                return WizardState::initial();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored sheet, starting fresh");
                return WizardState::initial();
            }
        };

        match serde_json::from_str::<WizardState>(&raw) {
            Ok(state) => {
                debug!(
                    key = %self.key,
                    solutions = state.solutions.len(),
                    actions = state.actions.len(),
                    "Restored sheet"
                );
                state
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored sheet is malformed, starting fresh");
                WizardState::initial()
            }
        }
    }

    /// Serializes and stores the sheet.
    pub async fn save(&self, state: &WizardState) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(state)?;
        self.store.save(&self.key, &json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStateStore;
    use crate::domain::sheet::{ProblemField, SheetEdit};
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl StateStore for FailingStore {
        async fn load(&self, _key: &str) -> Result<Option<String>, StateStoreError> {
            Err(StateStoreError::Unavailable("offline".into()))
        }

        async fn save(&self, _key: &str, _value: &str) -> Result<(), StateStoreError> {
            Err(StateStoreError::IoError("disk full".into()))
        }

        async fn exists(&self, _key: &str) -> Result<bool, StateStoreError> {
            Ok(false)
        }

        async fn remove(&self, _key: &str) -> Result<(), StateStoreError> {
            Ok(())
        }
    }

    fn titled(title: &str) -> WizardState {
        SheetEdit::Problem(ProblemField::Title(title.to_string())).apply(&WizardState::initial())
    }

    #[tokio::test]
    async fn missing_value_loads_initial_state() {
        let repo = SheetRepository::new(Arc::new(InMemoryStateStore::new()));
        assert_eq!(repo.load().await, WizardState::initial());
    }

    #[tokio::test]
    async fn malformed_value_loads_initial_state() {
        let store = InMemoryStateStore::with_value(STATE_KEY, "{not json");
        let repo = SheetRepository::new(Arc::new(store));
        assert_eq!(repo.load().await, WizardState::initial());
    }

    #[tokio::test]
    async fn wrong_shape_loads_initial_state() {
        let store = InMemoryStateStore::with_value(STATE_KEY, r#"{"rootCauses":[]}"#);
        let repo = SheetRepository::new(Arc::new(store));
        assert_eq!(repo.load().await, WizardState::initial());
    }

    #[tokio::test]
    async fn unreadable_store_loads_initial_state() {
        let repo = SheetRepository::new(Arc::new(FailingStore));
        assert_eq!(repo.load().await, WizardState::initial());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = Arc::new(InMemoryStateStore::new());
        let repo = SheetRepository::new(store.clone());
        let state = titled("Too many meetings");

        repo.save(&state).await.unwrap();

        assert!(store.exists(STATE_KEY).await.unwrap());
        assert_eq!(repo.load().await, state);
    }

    #[tokio::test]
    async fn save_surfaces_store_errors() {
        let repo = SheetRepository::new(Arc::new(FailingStore));
        let result = repo.save(&WizardState::initial()).await;
        assert!(matches!(result, Err(PersistenceError::Store(_))));
    }

    #[tokio::test]
    async fn custom_key_is_isolated() {
        let store = Arc::new(InMemoryStateStore::new());
        let a = SheetRepository::with_key(store.clone(), "sheet-a");
        let b = SheetRepository::with_key(store.clone(), "sheet-b");

        a.save(&titled("A")).await.unwrap();

        assert_eq!(b.load().await, WizardState::initial());
        assert_eq!(a.load().await.problem.title, "A");
    }
}
