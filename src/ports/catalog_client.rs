//! Catalog client port.
//!
//! The product listing lives in an external API; this port is the only way
//! the core reaches it. Failures surface as a single fetch error and leave
//! all local state untouched.

use async_trait::async_trait;

use crate::domain::catalog::Product;
use crate::domain::foundation::ErrorCode;

/// Errors that can occur while fetching the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Error fetching products: {0}")]
    FetchFailed(String),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::FetchFailed(_) => ErrorCode::CatalogFetchFailed,
        }
    }
}

/// Port for the upstream product listing API.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the full product listing.
    ///
    /// # Errors
    ///
    /// - `FetchFailed` on any transport or decode failure
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_client_is_object_safe() {
        fn _accepts_dyn(_client: &dyn CatalogClient) {}
    }

    #[test]
    fn fetch_failed_maps_to_catalog_code() {
        let err = CatalogError::FetchFailed("timeout".to_string());
        assert_eq!(err.code(), ErrorCode::CatalogFetchFailed);
    }
}
