//! QuoteCheckoutHandler - Query handler for the checkout summary.

use std::sync::Arc;

use crate::domain::foundation::Username;
use crate::domain::membership::MembershipTier;
use crate::domain::order::{CheckoutError, Quote};
use crate::ports::{CartRepository, UserDirectory};

use super::load_staged_cart;

/// Query for the checkout pricing summary.
#[derive(Debug, Clone)]
pub struct QuoteCheckoutQuery {
    pub username: Username,
}

/// Priced summary shown on the checkout page.
#[derive(Debug, Clone)]
pub struct QuoteCheckoutResult {
    pub quote: Quote,
    pub membership: MembershipTier,
}

/// Handler for quoting a checkout.
pub struct QuoteCheckoutHandler {
    carts: Arc<dyn CartRepository>,
    directory: Arc<dyn UserDirectory>,
}

impl QuoteCheckoutHandler {
    pub fn new(carts: Arc<dyn CartRepository>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { carts, directory }
    }

    pub async fn handle(
        &self,
        query: QuoteCheckoutQuery,
    ) -> Result<QuoteCheckoutResult, CheckoutError> {
        let cart = load_staged_cart(self.carts.as_ref(), &query.username).await?;

        // An account missing from the directory quotes at the entry tier
        let membership = self
            .directory
            .find(&query.username)
            .await
            .map_err(CheckoutError::from)?
            .map(|account| account.membership())
            .unwrap_or_default();

        let quote = Quote::price(&cart, membership)?;
        Ok(QuoteCheckoutResult { quote, membership })
    }
}
