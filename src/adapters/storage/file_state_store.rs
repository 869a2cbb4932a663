//! File-based State Store Adapter
//!
//! Stores each key as a JSON document on disk: `{base_path}/{key}.json`.
//! Writes go through a temp file and a rename so a crash never leaves a
//! truncated sheet behind.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{validate_key, StateStore, StateStoreError};

/// File-based store for the serialized sheet
#[derive(Debug, Clone)]
pub struct FileStateStore {
    base_path: PathBuf,
}

impl FileStateStore {
    /// Create a new file store rooted at a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileStateStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a key
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    /// Get the temporary file path used while writing a key
    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json.tmp", key))
    }

    /// Ensure directory exists
    async fn ensure_dir(&self) -> Result<(), StateStoreError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StateStoreError::IoError(format!(
                "Failed to create directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StateStoreError> {
        validate_key(key)?;
        let path = self.key_path(key);

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StateStoreError::IoError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StateStoreError> {
        validate_key(key)?;
        self.ensure_dir().await?;

        let temp_path = self.temp_path(key);
        let final_path = self.key_path(key);

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StateStoreError::IoError(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(value.as_bytes()).await.map_err(|e| {
            StateStoreError::IoError(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StateStoreError::IoError(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            StateStoreError::IoError(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StateStoreError> {
        validate_key(key)?;
        Ok(self.key_path(key).exists())
    }

    async fn remove(&self, key: &str) -> Result<(), StateStoreError> {
        validate_key(key)?;
        let path = self.key_path(key);

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StateStoreError::IoError(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KEY: &str = "problem-solver-state";

    #[tokio::test]
    async fn test_file_store_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStateStore::new(temp_dir.path());

        store.save(KEY, r#"{"problem":{}}"#).await.unwrap();

        let loaded = store.load(KEY).await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"problem":{}}"#));
    }

    #[tokio::test]
    async fn test_file_store_load_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStateStore::new(temp_dir.path());

        assert_eq!(store.load(KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_creates_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let store = FileStateStore::new(&nested);

        store.save(KEY, "{}").await.unwrap();

        assert!(nested.join("problem-solver-state.json").exists());
    }

    #[tokio::test]
    async fn test_file_store_overwrite_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStateStore::new(temp_dir.path());

        store.save(KEY, "first").await.unwrap();
        store.save(KEY, "second").await.unwrap();

        assert_eq!(store.load(KEY).await.unwrap().as_deref(), Some("second"));
        assert!(!temp_dir.path().join("problem-solver-state.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_store_exists_and_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStateStore::new(temp_dir.path());

        assert!(!store.exists(KEY).await.unwrap());
        store.save(KEY, "{}").await.unwrap();
        assert!(store.exists(KEY).await.unwrap());

        store.remove(KEY).await.unwrap();
        assert!(!store.exists(KEY).await.unwrap());

        // Removing again is fine
        store.remove(KEY).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStateStore::new(temp_dir.path());

        let result = store.save("../escape", "{}").await;
        assert!(matches!(result, Err(StateStoreError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_file_store_unwritable_directory_errors() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();
        let store = FileStateStore::new(&blocker);

        let result = store.save(KEY, "{}").await;
        assert!(matches!(result, Err(StateStoreError::IoError(_))));
    }
}
