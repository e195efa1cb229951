//! File-based key-value store adapter.
//!
//! Stores each key as one JSON document under a base directory, so the data
//! directory can be inspected and edited by hand during development.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::ports::{KeyValueStore, StorageError};

/// Key-value store backed by one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    /// Create a new file store with a base directory.
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// File path for a key. Key segments are separated by ':' in store keys;
    /// the separator maps to '-' on disk.
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key.replace(':', "-")))
    }

    async fn ensure_base_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let value = serde_json::from_str(&contents).map_err(|e| {
            StorageError::DeserializationFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Some(value))
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.ensure_base_dir().await?;

        let contents = serde_json::to_string_pretty(&value).map_err(|e| {
            StorageError::SerializationFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;

        fs::write(self.key_path(key), contents)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);

        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn get_returns_none_for_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        assert!(store.get("users").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_then_get_roundtrips() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        store
            .put("orders", json!([{"id": 1, "total": "27.25"}]))
            .await
            .unwrap();

        let value = store.get("orders").await.unwrap().unwrap();
        assert_eq!(value, json!([{"id": 1, "total": "27.25"}]));
    }

    #[tokio::test]
    async fn keys_with_separators_map_to_plain_file_names() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        store.put("cart:alice", json!([])).await.unwrap();

        assert!(temp_dir.path().join("cart-alice.json").exists());
    }

    #[tokio::test]
    async fn remove_deletes_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        store.put("sessions", json!({})).await.unwrap();
        store.remove("sessions").await.unwrap();

        assert!(store.get("sessions").await.unwrap().is_none());
        assert!(!temp_dir.path().join("sessions.json").exists());
    }

    #[tokio::test]
    async fn remove_of_missing_key_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        assert!(store.remove("missing").await.is_ok());
    }

    #[tokio::test]
    async fn malformed_file_surfaces_deserialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        std::fs::write(temp_dir.path().join("users.json"), "{not json").unwrap();

        let result = store.get("users").await;
        assert!(matches!(
            result,
            Err(StorageError::DeserializationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn survives_reopening_the_store() {
        let temp_dir = TempDir::new().unwrap();

        {
            let store = JsonFileStore::new(temp_dir.path());
            store.put("last_order_id", json!(7)).await.unwrap();
        }

        let reopened = JsonFileStore::new(temp_dir.path());
        assert_eq!(reopened.get("last_order_id").await.unwrap(), Some(json!(7)));
    }
}
