//! HTTP handlers for cart endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::cart::{
    AddItemCommand, AddItemHandler, GetCartHandler, GetCartQuery,
};
use crate::domain::cart::CartError;

use super::dto::{AddItemRequest, AddItemResponse, CartResponse};

/// Handler state for cart endpoints.
#[derive(Clone)]
pub struct CartHandlers {
    add_item: Arc<AddItemHandler>,
    get_cart: Arc<GetCartHandler>,
}

impl CartHandlers {
    pub fn new(add_item: Arc<AddItemHandler>, get_cart: Arc<GetCartHandler>) -> Self {
        Self { add_item, get_cart }
    }
}

/// GET /api/cart - The staged cart with its badge count
pub async fn get_cart(
    State(handlers): State<CartHandlers>,
    RequireSession(username): RequireSession,
) -> Response {
    match handlers.get_cart.handle(GetCartQuery { username }).await {
        Ok(result) => {
            let response = CartResponse::from(&result.cart);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_cart_error(e),
    }
}

/// POST /api/cart/items - Stage a product (merges by product id)
pub async fn add_item(
    State(handlers): State<CartHandlers>,
    RequireSession(username): RequireSession,
    Json(req): Json<AddItemRequest>,
) -> Response {
    let title = req.title.clone();
    let cmd = AddItemCommand {
        username,
        product_id: req.id,
        title: req.title,
        price: req.price,
        quantity: req.quantity,
    };

    match handlers.add_item.handle(cmd).await {
        Ok(result) => {
            let response = AddItemResponse {
                message: format!("{} added to your cart.", title),
                cart: CartResponse::from(&result.cart),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_cart_error(e),
    }
}

fn handle_cart_error(error: CartError) -> Response {
    error_response(error.code(), error.message())
}
