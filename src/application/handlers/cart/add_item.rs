//! AddItemHandler - Command handler for staging a product.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::cart::{Cart, CartError, LineItem};
use crate::domain::foundation::{ProductId, Username};
use crate::ports::{CartRepository, CartRepositoryError};

/// Command to stage a product in the cart.
#[derive(Debug, Clone)]
pub struct AddItemCommand {
    pub username: Username,
    pub product_id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Result of staging a product.
#[derive(Debug, Clone)]
pub struct AddItemResult {
    pub cart: Cart,
}

/// Handler for add-to-cart.
pub struct AddItemHandler {
    carts: Arc<dyn CartRepository>,
}

impl AddItemHandler {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    pub async fn handle(&self, cmd: AddItemCommand) -> Result<AddItemResult, CartError> {
        let item = LineItem::new(cmd.product_id, cmd.title, cmd.price, cmd.quantity)?;

        let mut cart = match self.carts.load(&cmd.username).await {
            Ok(cart) => cart,
            Err(CartRepositoryError::Corrupt) => {
                // Self-heal: discard the corrupt cart instead of repairing it
                self.carts
                    .clear(&cmd.username)
                    .await
                    .map_err(|e| CartError::infrastructure(e.to_string()))?;
                tracing::warn!(username = %cmd.username, "discarded corrupt cart");
                return Err(CartError::InvalidCartData);
            }
            Err(e) => return Err(CartError::infrastructure(e.to_string())),
        };

        cart.add(item);

        self.carts
            .save(&cmd.username, &cart)
            .await
            .map_err(|e| CartError::infrastructure(e.to_string()))?;

        Ok(AddItemResult { cart })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryKeyValueStore, StoreCartRepository};
    use crate::ports::KeyValueStore;
    use serde_json::json;

    fn username() -> Username {
        Username::new("alice").unwrap()
    }

    fn cmd(product_id: u64, price: &str) -> AddItemCommand {
        AddItemCommand {
            username: username(),
            product_id: ProductId::new(product_id),
            title: format!("Product {product_id}"),
            price: price.parse().unwrap(),
            quantity: 1,
        }
    }

    fn handler_over(store: Arc<InMemoryKeyValueStore>) -> AddItemHandler {
        AddItemHandler::new(Arc::new(StoreCartRepository::new(store)))
    }

    #[tokio::test]
    async fn stages_a_new_line_item() {
        let handler = handler_over(Arc::new(InMemoryKeyValueStore::new()));

        let result = handler.handle(cmd(1, "10.00")).await.unwrap();

        assert_eq!(result.cart.line_count(), 1);
        assert_eq!(result.cart.total_quantity(), 1);
    }

    #[tokio::test]
    async fn adding_the_same_product_twice_merges() {
        let handler = handler_over(Arc::new(InMemoryKeyValueStore::new()));

        handler.handle(cmd(1, "10.00")).await.unwrap();
        let result = handler.handle(cmd(1, "10.00")).await.unwrap();

        assert_eq!(result.cart.line_count(), 1);
        assert_eq!(result.cart.items()[0].quantity(), 2);
    }

    #[tokio::test]
    async fn zero_quantity_fails_validation() {
        let handler = handler_over(Arc::new(InMemoryKeyValueStore::new()));

        let mut command = cmd(1, "10.00");
        command.quantity = 0;

        let err = handler.handle(command).await.unwrap_err();
        assert!(matches!(err, CartError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn corrupt_cart_is_discarded_and_reported() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.put("cart:alice", json!({"bad": "shape"})).await.unwrap();

        let handler = handler_over(store.clone());
        let err = handler.handle(cmd(1, "10.00")).await.unwrap_err();

        assert_eq!(err, CartError::InvalidCartData);
        assert!(store.get("cart:alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn staging_again_after_discard_starts_fresh() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.put("cart:alice", json!({"bad": "shape"})).await.unwrap();

        let handler = handler_over(store);
        handler.handle(cmd(1, "10.00")).await.unwrap_err();
        let result = handler.handle(cmd(1, "10.00")).await.unwrap();

        assert_eq!(result.cart.total_quantity(), 1);
    }
}
