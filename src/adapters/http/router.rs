//! Top-level router assembly.
//!
//! Account endpoints are public; everything else sits behind the session
//! middleware, the API rendition of the storefront's sign-in redirect.

use axum::{middleware, routing::get, Router};

use crate::ports::SessionStore;
use std::sync::Arc;

use super::account::{account_routes, AccountHandlers};
use super::cart::{cart_routes, CartHandlers};
use super::catalog::{catalog_routes, CatalogHandlers};
use super::checkout::{checkout_routes, CheckoutHandlers};
use super::middleware::session_middleware;
use super::orders::{order_routes, OrderHandlers};

/// Everything the router needs, already wired.
#[derive(Clone)]
pub struct AppState {
    pub account: AccountHandlers,
    pub cart: CartHandlers,
    pub checkout: CheckoutHandlers,
    pub orders: OrderHandlers,
    pub catalog: CatalogHandlers,
    pub sessions: Arc<dyn SessionStore>,
}

/// Builds the storefront router.
pub fn storefront_router(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/api/catalog", catalog_routes(state.catalog))
        .nest("/api/cart", cart_routes(state.cart))
        .nest("/api/checkout", checkout_routes(state.checkout))
        .nest("/api/orders", order_routes(state.orders))
        .layer(middleware::from_fn_with_state(
            state.sessions,
            session_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .nest("/api/accounts", account_routes(state.account))
        .merge(protected)
}

/// GET /health - liveness probe
async fn health() -> &'static str {
    "ok"
}
