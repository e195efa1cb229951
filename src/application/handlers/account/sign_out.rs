//! SignOutHandler - Command handler for revoking sessions.

use std::sync::Arc;

use crate::domain::account::AccountError;
use crate::domain::foundation::SessionToken;
use crate::ports::SessionStore;

/// Command to sign out.
#[derive(Debug, Clone)]
pub struct SignOutCommand {
    pub token: SessionToken,
}

/// Handler for sign-out.
pub struct SignOutHandler {
    sessions: Arc<dyn SessionStore>,
}

impl SignOutHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: SignOutCommand) -> Result<(), AccountError> {
        self.sessions.revoke(&cmd.token).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryKeyValueStore, StoreSessionStore};
    use crate::domain::foundation::Username;

    #[tokio::test]
    async fn sign_out_revokes_the_token() {
        let sessions = Arc::new(StoreSessionStore::new(Arc::new(InMemoryKeyValueStore::new())));
        let token = SessionToken::new();
        sessions
            .insert(token, Username::new("alice").unwrap())
            .await
            .unwrap();

        SignOutHandler::new(sessions.clone())
            .handle(SignOutCommand { token })
            .await
            .unwrap();

        assert!(sessions.resolve(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn signing_out_twice_is_ok() {
        let sessions = Arc::new(StoreSessionStore::new(Arc::new(InMemoryKeyValueStore::new())));
        let token = SessionToken::new();

        let handler = SignOutHandler::new(sessions);
        handler.handle(SignOutCommand { token }).await.unwrap();
        handler.handle(SignOutCommand { token }).await.unwrap();
    }
}
