//! Catalog handlers.

mod list_products;

pub use list_products::ListProductsHandler;
