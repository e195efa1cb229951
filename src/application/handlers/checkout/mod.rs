//! Checkout handlers - quoting and committing an order.
//!
//! Both handlers share one cart-loading path so a corrupt staged cart is
//! handled identically everywhere: it is discarded, never repaired.

mod place_order;
mod quote;

pub use place_order::{PlaceOrderCommand, PlaceOrderHandler, PlaceOrderResult};
pub use quote::{QuoteCheckoutHandler, QuoteCheckoutQuery, QuoteCheckoutResult};

use crate::domain::cart::Cart;
use crate::domain::foundation::Username;
use crate::domain::order::CheckoutError;
use crate::ports::{CartRepository, CartRepositoryError};

/// Loads the staged cart, discarding it if it no longer decodes.
pub(crate) async fn load_staged_cart(
    carts: &dyn CartRepository,
    username: &Username,
) -> Result<Cart, CheckoutError> {
    match carts.load(username).await {
        Ok(cart) => Ok(cart),
        Err(CartRepositoryError::Corrupt) => {
            carts
                .clear(username)
                .await
                .map_err(|e| CheckoutError::infrastructure(e.to_string()))?;
            tracing::warn!(username = %username, "discarded corrupt cart");
            Err(CheckoutError::InvalidCartData)
        }
        Err(e) => Err(CheckoutError::infrastructure(e.to_string())),
    }
}
