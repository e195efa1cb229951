//! Catalog client configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Catalog configuration (upstream product listing API)
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the product API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidCatalogUrl);
        }
        if self.fetch_timeout_secs == 0 || self.fetch_timeout_secs > 120 {
            return Err(ValidationError::InvalidCatalogTimeout);
        }
        Ok(())
    }

    /// Full URL of the product listing endpoint
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://fakestoreapi.com".to_string()
}

fn default_fetch_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_fakestore() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://fakestoreapi.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_products_url_joins_without_double_slash() {
        let config = CatalogConfig {
            base_url: "https://api.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.products_url(), "https://api.example.com/products");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = CatalogConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = CatalogConfig {
            fetch_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
