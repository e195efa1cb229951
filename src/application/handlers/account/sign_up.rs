//! SignUpHandler - Command handler for registering accounts.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::account::{Account, AccountError};
use crate::domain::foundation::{ErrorCode, Username};
use crate::ports::{PasswordHasher, UserDirectory};

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub username: String,
    pub password: SecretString,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct SignUpResult {
    pub account: Account,
}

/// Handler for account registration.
pub struct SignUpHandler {
    directory: Arc<dyn UserDirectory>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SignUpHandler {
    pub fn new(directory: Arc<dyn UserDirectory>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { directory, hasher }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignUpResult, AccountError> {
        // 1. Validate the username
        let username = Username::new(cmd.username)?;

        // 2. Reject duplicates before hashing
        if self.directory.find(&username).await?.is_some() {
            return Err(AccountError::username_taken(username));
        }

        // 3. Register at the entry tier with a salted hash
        let account = Account::register(username, self.hasher.hash(&cmd.password));

        match self.directory.insert(&account).await {
            Ok(()) => {}
            // The directory enforces uniqueness as well; map its refusal
            Err(e) if e.code == ErrorCode::UsernameTaken => {
                return Err(AccountError::username_taken(account.username().clone()));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(username = %account.username(), "account registered");
        Ok(SignUpResult { account })
    }
}
