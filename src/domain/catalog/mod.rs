//! Catalog module - product listing entries.
//!
//! Products are fetched from the upstream catalog API and never persisted;
//! the staged cart snapshots the fields it needs at add-to-cart time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProductId;

/// One product as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product id.
    pub id: ProductId,

    /// Display title.
    pub title: String,

    /// Unit price. Carried as a JSON number, matching the upstream form.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Image URL.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_from_upstream_shape() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "image": "https://example.com/backpack.png"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, "109.95".parse().unwrap());
    }

    #[test]
    fn product_price_serializes_as_number() {
        let product = Product {
            id: ProductId::new(2),
            title: "Mug".to_string(),
            price: "9.50".parse().unwrap(),
            image: "https://example.com/mug.png".to_string(),
        };

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"price\":9.5"), "got {json}");
    }

    #[test]
    fn product_tolerates_string_ids() {
        let json = r#"{"id":"3","title":"Hat","price":5.0,"image":"https://example.com/hat.png"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
    }
}
