//! Session store port.
//!
//! Records which session tokens are currently signed in and for whom. The
//! token is issued at sign-in, carried by the client on every request, and
//! revoked at sign-out.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionToken, Username};

/// Port for issued session tokens.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Record a newly issued token for `username`.
    async fn insert(&self, token: SessionToken, username: Username) -> Result<(), DomainError>;

    /// Resolve a token to the signed-in username.
    ///
    /// Returns `None` for unknown or revoked tokens.
    async fn resolve(&self, token: &SessionToken) -> Result<Option<Username>, DomainError>;

    /// Revoke a token. Revoking an unknown token is not an error.
    async fn revoke(&self, token: &SessionToken) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }
}
