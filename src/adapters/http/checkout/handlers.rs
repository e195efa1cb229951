//! HTTP handlers for checkout endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::checkout::{
    PlaceOrderCommand, PlaceOrderHandler, QuoteCheckoutHandler, QuoteCheckoutQuery,
};
use crate::domain::order::CheckoutError;

use super::dto::{PlaceOrderRequest, PlaceOrderResponse, QuoteResponse};

/// Handler state for checkout endpoints.
#[derive(Clone)]
pub struct CheckoutHandlers {
    quote: Arc<QuoteCheckoutHandler>,
    place_order: Arc<PlaceOrderHandler>,
}

impl CheckoutHandlers {
    pub fn new(quote: Arc<QuoteCheckoutHandler>, place_order: Arc<PlaceOrderHandler>) -> Self {
        Self { quote, place_order }
    }
}

/// GET /api/checkout/quote - Pricing summary for the checkout page
pub async fn quote_checkout(
    State(handlers): State<CheckoutHandlers>,
    RequireSession(username): RequireSession,
) -> Response {
    match handlers.quote.handle(QuoteCheckoutQuery { username }).await {
        Ok(result) => {
            let response = QuoteResponse::from(&result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_checkout_error(e),
    }
}

/// POST /api/checkout - Commit the staged cart into an order
pub async fn place_order(
    State(handlers): State<CheckoutHandlers>,
    RequireSession(username): RequireSession,
    Json(req): Json<PlaceOrderRequest>,
) -> Response {
    let cmd = PlaceOrderCommand {
        username,
        delivery_address: req.delivery_address,
        payment_method: req.payment_method,
    };

    match handlers.place_order.handle(cmd).await {
        Ok(result) => {
            let response = PlaceOrderResponse::new(&result.order, result.points_earned);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_checkout_error(e),
    }
}

fn handle_checkout_error(error: CheckoutError) -> Response {
    error_response(error.code(), error.message())
}
