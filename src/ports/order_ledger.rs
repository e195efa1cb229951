//! Order ledger port.
//!
//! Append-only record of committed orders plus the sequential id counter.
//! Orders are never mutated or deleted.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrderId, Username};
use crate::domain::order::Order;

/// Repository port for the order ledger.
#[async_trait]
pub trait OrderLedger: Send + Sync {
    /// Allocate the next order id by advancing the counter.
    ///
    /// Ids are strictly increasing; the counter starts at zero so the first
    /// allocated id is 1. The advanced counter is persisted before the id is
    /// returned.
    async fn next_id(&self) -> Result<OrderId, DomainError>;

    /// Append a committed order to the ledger.
    async fn append(&self, order: &Order) -> Result<(), DomainError>;

    /// List all orders owned by `username`, oldest first.
    async fn orders_for(&self, username: &Username) -> Result<Vec<Order>, DomainError>;
}
