//! HTTP routes for checkout endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{place_order, quote_checkout, CheckoutHandlers};

/// Creates the checkout router with all endpoints.
pub fn checkout_routes(handlers: CheckoutHandlers) -> Router {
    Router::new()
        .route("/", post(place_order))
        .route("/quote", get(quote_checkout))
        .with_state(handlers)
}
