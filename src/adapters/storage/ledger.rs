//! Order ledger adapter over the key-value store.
//!
//! Two store keys: the append-only order list and the last-allocated order
//! id. The counter is advanced and persisted before an id is handed out, so
//! ids stay unique even if the subsequent append never happens.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, OrderId, Username};
use crate::domain::order::Order;
use crate::ports::{KeyValueStore, OrderLedger};

/// Store key holding the committed order list.
const ORDERS_KEY: &str = "orders";

/// Store key holding the last allocated order id.
const LAST_ORDER_ID_KEY: &str = "last_order_id";

/// Order ledger backed by the key-value store.
pub struct StoreOrderLedger {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoreOrderLedger {
    /// Creates a ledger over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load_all(&self) -> Result<Vec<Order>, DomainError> {
        match self.store.get(ORDERS_KEY).await? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| DomainError::storage(format!("order ledger is corrupt: {e}"))),
            None => Ok(Vec::new()),
        }
    }

    async fn load_counter(&self) -> Result<u64, DomainError> {
        match self.store.get(LAST_ORDER_ID_KEY).await? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| DomainError::storage(format!("order counter is corrupt: {e}"))),
            None => Ok(0),
        }
    }
}

#[async_trait]
impl OrderLedger for StoreOrderLedger {
    async fn next_id(&self) -> Result<OrderId, DomainError> {
        let _guard = self.write_lock.lock().await;

        let next = self.load_counter().await? + 1;
        self.store.put(LAST_ORDER_ID_KEY, json!(next)).await?;
        Ok(OrderId::new(next))
    }

    async fn append(&self, order: &Order) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut orders = self.load_all().await?;
        orders.push(order.clone());

        let value =
            serde_json::to_value(&orders).map_err(|e| DomainError::storage(e.to_string()))?;
        self.store.put(ORDERS_KEY, value).await?;
        Ok(())
    }

    async fn orders_for(&self, username: &Username) -> Result<Vec<Order>, DomainError> {
        let orders = self.load_all().await?;
        Ok(orders
            .into_iter()
            .filter(|order| order.username() == username)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::cart::{Cart, LineItem};
    use crate::domain::foundation::ProductId;
    use crate::domain::membership::MembershipTier;
    use crate::domain::order::{DeliveryAddress, PaymentMethod, Quote};

    fn ledger() -> StoreOrderLedger {
        StoreOrderLedger::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    fn order(id: OrderId, owner: &str) -> Order {
        let mut cart = Cart::new();
        cart.add(
            LineItem::new(ProductId::new(1), "Widget", "10.00".parse().unwrap(), 1).unwrap(),
        );
        let quote = Quote::price(&cart, MembershipTier::Bronze).unwrap();
        Order::commit(
            id,
            Username::new(owner).unwrap(),
            cart,
            quote,
            DeliveryAddress::new("1 High Street").unwrap(),
            PaymentMethod::new("credit-card").unwrap(),
        )
    }

    #[tokio::test]
    async fn first_allocated_id_is_one() {
        let ledger = ledger();
        assert_eq!(ledger.next_id().await.unwrap(), OrderId::new(1));
    }

    #[tokio::test]
    async fn ids_are_strictly_increasing() {
        let ledger = ledger();
        let mut previous = ledger.next_id().await.unwrap();
        for _ in 0..5 {
            let next = ledger.next_id().await.unwrap();
            assert!(next.as_u64() > previous.as_u64());
            previous = next;
        }
    }

    #[tokio::test]
    async fn counter_survives_reconstruction_over_same_store() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());

        let first = StoreOrderLedger::new(store.clone());
        first.next_id().await.unwrap();
        first.next_id().await.unwrap();

        let second = StoreOrderLedger::new(store);
        assert_eq!(second.next_id().await.unwrap(), OrderId::new(3));
    }

    #[tokio::test]
    async fn append_then_list_returns_owned_orders() {
        let ledger = ledger();
        let id = ledger.next_id().await.unwrap();
        ledger.append(&order(id, "alice")).await.unwrap();

        let orders = ledger
            .orders_for(&Username::new("alice").unwrap())
            .await
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id(), id);
    }

    #[tokio::test]
    async fn orders_are_filtered_by_owner() {
        let ledger = ledger();

        let alice_id = ledger.next_id().await.unwrap();
        ledger.append(&order(alice_id, "alice")).await.unwrap();
        let bob_id = ledger.next_id().await.unwrap();
        ledger.append(&order(bob_id, "bob")).await.unwrap();

        let alices = ledger
            .orders_for(&Username::new("alice").unwrap())
            .await
            .unwrap();
        assert_eq!(alices.len(), 1);
        assert_eq!(alices[0].username().as_str(), "alice");
    }

    #[tokio::test]
    async fn orders_list_keeps_append_order() {
        let ledger = ledger();
        for _ in 0..3 {
            let id = ledger.next_id().await.unwrap();
            ledger.append(&order(id, "alice")).await.unwrap();
        }

        let orders = ledger
            .orders_for(&Username::new("alice").unwrap())
            .await
            .unwrap();
        let ids: Vec<u64> = orders.iter().map(|o| o.id().as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
