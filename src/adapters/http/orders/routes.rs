//! HTTP routes for order endpoints.

use axum::{routing::get, Router};

use super::handlers::{order_history, OrderHandlers};

/// Creates the orders router with all endpoints.
pub fn order_routes(handlers: OrderHandlers) -> Router {
    Router::new()
        .route("/", get(order_history))
        .with_state(handlers)
}
