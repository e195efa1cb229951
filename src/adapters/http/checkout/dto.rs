//! HTTP DTOs for checkout endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::orders::OrderResponse;
use crate::application::handlers::checkout::QuoteCheckoutResult;
use crate::domain::membership::MembershipTier;
use crate::domain::order::Order;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to place the order.
///
/// Both fields default to empty so a missing field surfaces as the matching
/// checkout rejection rather than a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub payment_method: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Priced checkout summary.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub membership: MembershipTier,
}

impl From<&QuoteCheckoutResult> for QuoteResponse {
    fn from(result: &QuoteCheckoutResult) -> Self {
        Self {
            subtotal: format!("{:.2}", result.quote.subtotal()),
            shipping: format!("{:.2}", result.quote.shipping()),
            total: format!("{:.2}", result.quote.total()),
            membership: result.membership,
        }
    }
}

/// Response after a committed order.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceOrderResponse {
    pub message: String,
    pub points_earned: u64,
    pub order: OrderResponse,
}

impl PlaceOrderResponse {
    pub fn new(order: &Order, points_earned: u64) -> Self {
        Self {
            message: "Order confirmed! Thank you.".to_string(),
            points_earned,
            order: OrderResponse::from(order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_order_request_defaults_missing_fields_to_empty() {
        let req: PlaceOrderRequest = serde_json::from_str("{}").unwrap();
        assert!(req.delivery_address.is_empty());
        assert!(req.payment_method.is_empty());
    }
}
