//! Session store adapter over the key-value store.
//!
//! All issued tokens live under one store key as a JSON object mapping the
//! token to the signed-in username.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, SessionToken, Username};
use crate::ports::{KeyValueStore, SessionStore};

/// Store key holding the token map.
const SESSIONS_KEY: &str = "sessions";

/// Session store backed by the key-value store.
pub struct StoreSessionStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoreSessionStore {
    /// Creates a session store over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load_all(&self) -> Result<HashMap<String, Username>, DomainError> {
        match self.store.get(SESSIONS_KEY).await? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| DomainError::storage(format!("session map is corrupt: {e}"))),
            None => Ok(HashMap::new()),
        }
    }

    async fn save_all(&self, sessions: &HashMap<String, Username>) -> Result<(), DomainError> {
        let value =
            serde_json::to_value(sessions).map_err(|e| DomainError::storage(e.to_string()))?;
        self.store.put(SESSIONS_KEY, value).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for StoreSessionStore {
    async fn insert(&self, token: SessionToken, username: Username) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut sessions = self.load_all().await?;
        sessions.insert(token.to_string(), username);
        self.save_all(&sessions).await
    }

    async fn resolve(&self, token: &SessionToken) -> Result<Option<Username>, DomainError> {
        let sessions = self.load_all().await?;
        Ok(sessions.get(&token.to_string()).cloned())
    }

    async fn revoke(&self, token: &SessionToken) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut sessions = self.load_all().await?;
        if sessions.remove(&token.to_string()).is_some() {
            self.save_all(&sessions).await?;
        }
        Ok(())
    }
}
