//! HTTP DTOs for cart endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::cart::{Cart, LineItem};
use crate::domain::foundation::ProductId;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to stage a product. Mirrors the product card: id, title, price.
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One staged line item.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemResponse {
    pub id: u64,
    pub title: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&LineItem> for CartItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id().as_u64(),
            title: item.title().to_string(),
            price: format!("{:.2}", item.price()),
            quantity: item.quantity(),
            line_total: format!("{:.2}", item.line_total()),
        }
    }
}

/// The staged cart with its badge count.
#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub item_count: u32,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            item_count: cart.total_quantity(),
        }
    }
}

/// Response after staging a product.
#[derive(Debug, Clone, Serialize)]
pub struct AddItemResponse {
    pub message: String,
    pub cart: CartResponse,
}
