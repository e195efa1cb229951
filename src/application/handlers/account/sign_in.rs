//! SignInHandler - Command handler for authenticating accounts.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::account::{Account, AccountError};
use crate::domain::foundation::{SessionToken, Username};
use crate::ports::{PasswordHasher, SessionStore, UserDirectory};

/// Command to sign in.
#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub username: String,
    pub password: SecretString,
}

/// Result of successful sign-in.
#[derive(Debug, Clone)]
pub struct SignInResult {
    pub token: SessionToken,
    pub account: Account,
}

/// Handler for sign-in.
pub struct SignInHandler {
    directory: Arc<dyn UserDirectory>,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
}

impl SignInHandler {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            directory,
            hasher,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: SignInCommand) -> Result<SignInResult, AccountError> {
        // A malformed username can never match a directory entry; report it
        // the same way as a wrong password.
        let username =
            Username::new(cmd.username).map_err(|_| AccountError::invalid_credentials())?;

        let account = self
            .directory
            .find(&username)
            .await?
            .ok_or_else(AccountError::invalid_credentials)?;

        if !self.hasher.verify(&cmd.password, account.password_hash()) {
            return Err(AccountError::invalid_credentials());
        }

        let token = SessionToken::new();
        self.sessions.insert(token, username).await?;

        tracing::info!(username = %account.username(), "signed in");
        Ok(SignInResult { token, account })
    }
}
