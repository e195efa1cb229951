//! Cart repository port.
//!
//! One staged cart per username. A cart that fails to decode is reported as
//! corrupt so callers can discard it rather than attempt repair.

use async_trait::async_trait;

use crate::domain::cart::Cart;
use crate::domain::foundation::Username;

/// Errors that can occur during cart persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum CartRepositoryError {
    /// The stored cart could not be decoded into line items.
    #[error("Stored cart is corrupt")]
    Corrupt,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Repository port for the staged cart.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Load the staged cart for `username`.
    ///
    /// Returns an empty cart if nothing is staged.
    ///
    /// # Errors
    ///
    /// - `Corrupt` if the stored value cannot be decoded
    /// - `Storage` on persistence failure
    async fn load(&self, username: &Username) -> Result<Cart, CartRepositoryError>;

    /// Persist the staged cart for `username`.
    async fn save(&self, username: &Username, cart: &Cart) -> Result<(), CartRepositoryError>;

    /// Delete the staged cart for `username`. Clearing an absent cart is not
    /// an error.
    async fn clear(&self, username: &Username) -> Result<(), CartRepositoryError>;
}
