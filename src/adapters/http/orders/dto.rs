//! HTTP DTOs for order endpoints.

use serde::Serialize;

use crate::domain::account::Account;
use crate::domain::cart::LineItem;
use crate::domain::membership::MembershipTier;
use crate::domain::order::Order;

/// One line of a committed order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemResponse {
    pub id: u64,
    pub title: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&LineItem> for OrderItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id().as_u64(),
            title: item.title().to_string(),
            quantity: item.quantity(),
            line_total: format!("{:.2}", item.line_total()),
        }
    }
}

/// One committed order as shown in the history.
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: u64,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub delivery_address: String,
    pub payment_method: String,
    pub points_earned: u64,
    pub placed_at: String,
    pub items: Vec<OrderItemResponse>,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().as_u64(),
            subtotal: format!("{:.2}", order.subtotal()),
            shipping: format!("{:.2}", order.shipping()),
            total: format!("{:.2}", order.total()),
            delivery_address: order.delivery_address().as_str().to_string(),
            payment_method: order.payment_method().as_str().to_string(),
            points_earned: order.points_earned(),
            placed_at: order.placed_at().as_datetime().to_rfc3339(),
            items: order.items().iter().map(OrderItemResponse::from).collect(),
        }
    }
}

/// The profile view: account summary plus order history.
#[derive(Debug, Clone, Serialize)]
pub struct OrderHistoryResponse {
    pub username: String,
    pub membership: MembershipTier,
    pub points: u64,
    pub orders: Vec<OrderResponse>,
}

impl OrderHistoryResponse {
    pub fn new(account: &Account, orders: &[Order]) -> Self {
        Self {
            username: account.username().to_string(),
            membership: account.membership(),
            points: account.points(),
            orders: orders.iter().map(OrderResponse::from).collect(),
        }
    }
}
