//! HTTP routes for cart endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_item, get_cart, CartHandlers};

/// Creates the cart router with all endpoints.
pub fn cart_routes(handlers: CartHandlers) -> Router {
    Router::new()
        .route("/", get(get_cart))
        .route("/items", post(add_item))
        .with_state(handlers)
}
