//! User directory port.
//!
//! The directory of registered accounts, keyed by unique username. Accounts
//! are created at sign-up and never deleted.

use async_trait::async_trait;

use crate::domain::account::Account;
use crate::domain::foundation::{DomainError, Username};

/// Repository port for account persistence.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Register a new account.
    ///
    /// # Errors
    ///
    /// - `UsernameTaken` if an account with the same username exists
    /// - `StorageError` on persistence failure
    async fn insert(&self, account: &Account) -> Result<(), DomainError>;

    /// Find an account by username.
    ///
    /// Returns `None` if not registered.
    async fn find(&self, username: &Username) -> Result<Option<Account>, DomainError>;

    /// Update an existing account (membership, points).
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the account doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, account: &Account) -> Result<(), DomainError>;

    /// Count registered accounts.
    async fn count(&self) -> Result<u64, DomainError>;
}
