//! PlaceOrderHandler - Command handler for committing a checkout.
//!
//! The commit sequence: load and validate the staged cart, price it for the
//! buyer's tier, validate the delivery details, allocate the next order id,
//! append the order to the ledger, credit loyalty points, and clear the
//! staged cart. The ledger append is the point of no return; failures after
//! it are logged rather than surfaced, so a committed order is never
//! reported as failed.

use std::sync::Arc;

use crate::domain::foundation::Username;
use crate::domain::order::{CheckoutError, DeliveryAddress, Order, PaymentMethod, Quote};
use crate::ports::{CartRepository, OrderLedger, UserDirectory};

use super::load_staged_cart;

/// Command to commit the staged cart into an order.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    pub username: Username,
    pub delivery_address: String,
    pub payment_method: String,
}

/// Result of a committed order.
#[derive(Debug, Clone)]
pub struct PlaceOrderResult {
    pub order: Order,
    pub points_earned: u64,
}

/// Handler for placing orders.
pub struct PlaceOrderHandler {
    carts: Arc<dyn CartRepository>,
    directory: Arc<dyn UserDirectory>,
    ledger: Arc<dyn OrderLedger>,
}

impl PlaceOrderHandler {
    pub fn new(
        carts: Arc<dyn CartRepository>,
        directory: Arc<dyn UserDirectory>,
        ledger: Arc<dyn OrderLedger>,
    ) -> Self {
        Self {
            carts,
            directory,
            ledger,
        }
    }

    pub async fn handle(&self, cmd: PlaceOrderCommand) -> Result<PlaceOrderResult, CheckoutError> {
        // 1. Load the staged cart (discarded if corrupt)
        let cart = load_staged_cart(self.carts.as_ref(), &cmd.username).await?;

        // 2. Price for the buyer's tier; unknown accounts price at bronze
        let account = self
            .directory
            .find(&cmd.username)
            .await
            .map_err(CheckoutError::from)?;
        let membership = account
            .as_ref()
            .map(|a| a.membership())
            .unwrap_or_default();
        let quote = Quote::price(&cart, membership)?;

        // 3. Validate delivery details before touching any state
        let delivery_address = DeliveryAddress::new(cmd.delivery_address)?;
        let payment_method = PaymentMethod::new(cmd.payment_method)?;

        // 4. Allocate the id and commit
        let order_id = self.ledger.next_id().await.map_err(CheckoutError::from)?;
        let order = Order::commit(
            order_id,
            cmd.username.clone(),
            cart,
            quote,
            delivery_address,
            payment_method,
        );
        self.ledger
            .append(&order)
            .await
            .map_err(CheckoutError::from)?;

        // 5. Credit loyalty points; the order is already committed, so a
        //    failed credit is logged and the commit stands
        let points_earned = order.points_earned();
        if points_earned > 0 {
            if let Some(mut account) = account {
                account.credit_points(points_earned);
                if let Err(e) = self.directory.update(&account).await {
                    tracing::warn!(
                        username = %cmd.username,
                        order_id = %order.id(),
                        error = %e,
                        "failed to credit loyalty points"
                    );
                }
            }
        }

        // 6. Clear the staged cart
        if let Err(e) = self.carts.clear(&cmd.username).await {
            tracing::warn!(
                username = %cmd.username,
                order_id = %order.id(),
                error = %e,
                "failed to clear staged cart after commit"
            );
        }

        tracing::info!(
            username = %cmd.username,
            order_id = %order.id(),
            total = %order.total(),
            "order committed"
        );

        Ok(PlaceOrderResult {
            order,
            points_earned,
        })
    }
}
