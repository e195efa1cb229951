//! Checkout pricing.
//!
//! Pure domain service: given a staged cart and the buyer's membership tier,
//! produce the subtotal, shipping, and total. Shipping is charged per unit
//! of quantity at the tier's rate, not per order.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::cart::Cart;
use crate::domain::membership::MembershipTier;

use super::CheckoutError;

/// Priced checkout summary.
///
/// # Invariants
///
/// - `total = subtotal + shipping`
/// - `shipping = tier rate × total quantity`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    subtotal: Decimal,
    shipping: Decimal,
    total: Decimal,
}

impl Quote {
    /// Prices a staged cart for the given membership tier.
    ///
    /// # Errors
    ///
    /// - `EmptyCart` if nothing is staged
    pub fn price(cart: &Cart, tier: MembershipTier) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let subtotal: Decimal = cart.items().iter().map(|item| item.line_total()).sum();
        let shipping = tier.shipping_rate() * Decimal::from(cart.total_quantity());

        Ok(Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
        })
    }

    /// Returns the sum of line totals.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Returns the shipping charge.
    pub fn shipping(&self) -> Decimal {
        self.shipping
    }

    /// Returns subtotal plus shipping.
    pub fn total(&self) -> Decimal {
        self.total
    }
}
