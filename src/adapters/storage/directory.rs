//! User directory adapter over the key-value store.
//!
//! The whole directory lives under one store key as a JSON array of
//! accounts. Mutations are serialized within the process; the store itself
//! has no transactions.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::account::Account;
use crate::domain::foundation::{DomainError, ErrorCode, Username};
use crate::ports::{KeyValueStore, UserDirectory};

/// Store key holding the account list.
const USERS_KEY: &str = "users";

/// User directory backed by the key-value store.
pub struct StoreUserDirectory {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoreUserDirectory {
    /// Creates a directory over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load_all(&self) -> Result<Vec<Account>, DomainError> {
        match self.store.get(USERS_KEY).await? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| DomainError::storage(format!("account list is corrupt: {e}"))),
            None => Ok(Vec::new()),
        }
    }

    async fn save_all(&self, accounts: &[Account]) -> Result<(), DomainError> {
        let value =
            serde_json::to_value(accounts).map_err(|e| DomainError::storage(e.to_string()))?;
        self.store.put(USERS_KEY, value).await?;
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for StoreUserDirectory {
    async fn insert(&self, account: &Account) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut accounts = self.load_all().await?;
        if accounts
            .iter()
            .any(|existing| existing.username() == account.username())
        {
            return Err(DomainError::new(
                ErrorCode::UsernameTaken,
                format!("Username already exists: {}", account.username()),
            ));
        }

        accounts.push(account.clone());
        self.save_all(&accounts).await
    }

    async fn find(&self, username: &Username) -> Result<Option<Account>, DomainError> {
        let accounts = self.load_all().await?;
        Ok(accounts
            .into_iter()
            .find(|account| account.username() == username))
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut accounts = self.load_all().await?;
        let position = accounts
            .iter()
            .position(|existing| existing.username() == account.username())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::AccountNotFound,
                    format!("Account not found: {}", account.username()),
                )
            })?;

        accounts[position] = account.clone();
        self.save_all(&accounts).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.load_all().await?.len() as u64)
    }
}
