//! Catalog adapters - upstream product API clients.

mod http;

pub use http::HttpCatalogClient;
