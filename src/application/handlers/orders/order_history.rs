//! OrderHistoryHandler - Query handler for the profile page.

use std::sync::Arc;

use crate::domain::account::{Account, AccountError};
use crate::domain::foundation::Username;
use crate::domain::order::Order;
use crate::ports::{OrderLedger, UserDirectory};

/// Query for an account's order history.
#[derive(Debug, Clone)]
pub struct OrderHistoryQuery {
    pub username: Username,
}

/// The profile view: the account plus its committed orders, oldest first.
#[derive(Debug, Clone)]
pub struct OrderHistoryResult {
    pub account: Account,
    pub orders: Vec<Order>,
}

/// Handler for the order-history view.
pub struct OrderHistoryHandler {
    directory: Arc<dyn UserDirectory>,
    ledger: Arc<dyn OrderLedger>,
}

impl OrderHistoryHandler {
    pub fn new(directory: Arc<dyn UserDirectory>, ledger: Arc<dyn OrderLedger>) -> Self {
        Self { directory, ledger }
    }

    pub async fn handle(&self, query: OrderHistoryQuery) -> Result<OrderHistoryResult, AccountError> {
        let account = self
            .directory
            .find(&query.username)
            .await?
            .ok_or_else(|| AccountError::not_found(query.username.clone()))?;

        let orders = self
            .ledger
            .orders_for(&query.username)
            .await
            .map_err(|e| AccountError::infrastructure(e.to_string()))?;

        Ok(OrderHistoryResult { account, orders })
    }
}
