//! Cart aggregate and line items.
//!
//! A cart stages line items between add-to-cart and checkout. Adding a
//! product that is already staged merges into the existing line item by
//! incrementing its quantity; the cart never holds two lines for the same
//! product id.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProductId, ValidationError};

/// One staged product with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product id, normalized to the numeric form.
    id: ProductId,

    /// Product title as listed in the catalog.
    title: String,

    /// Price per unit.
    price: Decimal,

    /// Units staged. Always at least 1.
    quantity: u32,
}

impl LineItem {
    /// Creates a line item.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank
    /// - `InvalidFormat` if the price is negative
    /// - `BelowMinimum` if the quantity is zero
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if price.is_sign_negative() {
            return Err(ValidationError::invalid_format("price", "cannot be negative"));
        }
        if quantity == 0 {
            return Err(ValidationError::below_minimum("quantity", 1, 0));
        }
        Ok(Self {
            id,
            title,
            price,
            quantity,
        })
    }

    /// Returns the product id.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the price per unit.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the staged quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns price × quantity for this line.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The staged cart: an ordered list of line items, one per product id.
///
/// Serialized transparently as a plain item array, which is also the stored
/// form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstitutes a cart from stored line items.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Returns the staged line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns true if nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total staged quantity across all lines (the badge count).
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(LineItem::quantity).sum()
    }

    /// Stages a line item, merging by product id.
    ///
    /// If the product is already staged, its quantity is incremented by the
    /// incoming quantity and the existing title/price are kept. Otherwise the
    /// item is appended.
    pub fn add(&mut self, item: LineItem) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }
}
