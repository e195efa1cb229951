//! Catalog endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::RequireSession;
use crate::application::handlers::catalog::ListProductsHandler;

/// Handler state for the catalog endpoint.
#[derive(Clone)]
pub struct CatalogHandlers {
    list_products: Arc<ListProductsHandler>,
}

impl CatalogHandlers {
    pub fn new(list_products: Arc<ListProductsHandler>) -> Self {
        Self { list_products }
    }
}

/// GET /api/catalog/products - The upstream product listing
pub async fn list_products(
    State(handlers): State<CatalogHandlers>,
    RequireSession(_username): RequireSession,
) -> Response {
    match handlers.list_products.handle().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "catalog fetch failed");
            error_response(e.code(), "Error fetching products.")
        }
    }
}

/// Creates the catalog router.
pub fn catalog_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .with_state(handlers)
}
