//! GetCartHandler - Query handler for the staged cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::Username;
use crate::ports::{CartRepository, CartRepositoryError};

/// Query for the staged cart.
#[derive(Debug, Clone)]
pub struct GetCartQuery {
    pub username: Username,
}

/// The staged cart plus the badge count shown next to the cart icon.
#[derive(Debug, Clone)]
pub struct GetCartResult {
    pub cart: Cart,
    pub item_count: u32,
}

/// Handler for reading the staged cart.
pub struct GetCartHandler {
    carts: Arc<dyn CartRepository>,
}

impl GetCartHandler {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    pub async fn handle(&self, query: GetCartQuery) -> Result<GetCartResult, CartError> {
        let cart = match self.carts.load(&query.username).await {
            Ok(cart) => cart,
            Err(CartRepositoryError::Corrupt) => {
                self.carts
                    .clear(&query.username)
                    .await
                    .map_err(|e| CartError::infrastructure(e.to_string()))?;
                tracing::warn!(username = %query.username, "discarded corrupt cart");
                return Err(CartError::InvalidCartData);
            }
            Err(e) => return Err(CartError::infrastructure(e.to_string())),
        };

        let item_count = cart.total_quantity();
        Ok(GetCartResult { cart, item_count })
    }
}
