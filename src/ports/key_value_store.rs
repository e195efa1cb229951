//! Key-value store port - the persistent store every repository sits on.
//!
//! Values are JSON documents keyed by string. There are no transactions and
//! none are claimed; repositories order their writes so that an interrupted
//! sequence never loses a committed record.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::DomainError;

/// Errors that can occur during key-value operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize value for key '{key}': {reason}")]
    SerializationFailed { key: String, reason: String },

    #[error("Failed to deserialize value for key '{key}': {reason}")]
    DeserializationFailed { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::storage(err.to_string())
    }
}

/// Port for string-keyed JSON document storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `None` if the key has never been written or was removed.
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
