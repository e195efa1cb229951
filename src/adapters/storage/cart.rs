//! Cart repository adapter over the key-value store.
//!
//! Each username gets its own store key holding the staged line items as a
//! plain JSON array. A stored value that no longer decodes is reported as
//! corrupt; callers discard it rather than attempt repair.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::Cart;
use crate::domain::foundation::Username;
use crate::ports::{CartRepository, CartRepositoryError, KeyValueStore, StorageError};

fn cart_key(username: &Username) -> String {
    format!("cart:{}", username)
}

impl From<StorageError> for CartRepositoryError {
    fn from(err: StorageError) -> Self {
        CartRepositoryError::Storage(err.to_string())
    }
}

/// Cart repository backed by the key-value store.
pub struct StoreCartRepository {
    store: Arc<dyn KeyValueStore>,
}

impl StoreCartRepository {
    /// Creates a cart repository over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartRepository for StoreCartRepository {
    async fn load(&self, username: &Username) -> Result<Cart, CartRepositoryError> {
        match self.store.get(&cart_key(username)).await? {
            Some(value) => {
                serde_json::from_value(value).map_err(|_| CartRepositoryError::Corrupt)
            }
            None => Ok(Cart::new()),
        }
    }

    async fn save(&self, username: &Username, cart: &Cart) -> Result<(), CartRepositoryError> {
        let value = serde_json::to_value(cart)
            .map_err(|e| CartRepositoryError::Storage(e.to_string()))?;
        self.store.put(&cart_key(username), value).await?;
        Ok(())
    }

    async fn clear(&self, username: &Username) -> Result<(), CartRepositoryError> {
        self.store.remove(&cart_key(username)).await?;
        Ok(())
    }
}
