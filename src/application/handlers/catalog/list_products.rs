//! ListProductsHandler - Query handler for the product listing.

use std::sync::Arc;

use crate::domain::catalog::Product;
use crate::ports::{CatalogClient, CatalogError};

/// Handler for listing catalog products.
pub struct ListProductsHandler {
    catalog: Arc<dyn CatalogClient>,
}

impl ListProductsHandler {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self { catalog }
    }

    /// Fetches the product listing from the upstream catalog.
    ///
    /// A failed fetch surfaces as `CatalogFetchFailed` and changes nothing.
    pub async fn handle(&self) -> Result<Vec<Product>, CatalogError> {
        self.catalog.list_products().await
    }
}
