//! HTTP handlers for order endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::orders::{OrderHistoryHandler, OrderHistoryQuery};

use super::dto::OrderHistoryResponse;

/// Handler state for order endpoints.
#[derive(Clone)]
pub struct OrderHandlers {
    history: Arc<OrderHistoryHandler>,
}

impl OrderHandlers {
    pub fn new(history: Arc<OrderHistoryHandler>) -> Self {
        Self { history }
    }
}

/// GET /api/orders - The signed-in account's order history
pub async fn order_history(
    State(handlers): State<OrderHandlers>,
    RequireSession(username): RequireSession,
) -> Response {
    match handlers.history.handle(OrderHistoryQuery { username }).await {
        Ok(result) => {
            let response = OrderHistoryResponse::new(&result.account, &result.orders);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e.code(), e.message()),
    }
}
