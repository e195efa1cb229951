//! HTTP catalog client.
//!
//! Fetches the product listing from the configured upstream API. Any
//! transport, status, or decode failure collapses into a single fetch error;
//! the caller surfaces it and leaves all local state untouched.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::CatalogConfig;
use crate::domain::catalog::Product;
use crate::ports::{CatalogClient, CatalogError};

/// Catalog client over the upstream product API.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    products_url: String,
}

impl HttpCatalogClient {
    /// Creates a client from catalog configuration.
    ///
    /// # Errors
    ///
    /// Returns `FetchFailed` if the underlying HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| CatalogError::FetchFailed(e.to_string()))?;

        Ok(Self {
            client,
            products_url: config.products_url(),
        })
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(&self.products_url)
            .send()
            .await
            .map_err(|e| CatalogError::FetchFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| CatalogError::FetchFailed(e.to_string()))?;

        let products: Vec<Product> = response
            .json()
            .await
            .map_err(|e| CatalogError::FetchFailed(e.to_string()))?;

        tracing::debug!(count = products.len(), "fetched catalog products");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_default_config() {
        let client = HttpCatalogClient::new(&CatalogConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn uses_the_configured_products_url() {
        let config = CatalogConfig {
            base_url: "https://catalog.example.com".to_string(),
            ..Default::default()
        };
        let client = HttpCatalogClient::new(&config).unwrap();
        assert_eq!(client.products_url, "https://catalog.example.com/products");
    }
}
