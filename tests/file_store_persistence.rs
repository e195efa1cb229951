//! Integration tests for file-backed persistence.
//!
//! The storefront's state must survive a process restart when the file
//! backend is configured. These tests wire the handlers over a file store,
//! drop everything, rewire over the same directory, and check that the
//! directory, ledger, and counter carried over.

use std::sync::Arc;

use secrecy::SecretString;
use tempfile::TempDir;

use cartwright::adapters::auth::SaltedSha256Hasher;
use cartwright::adapters::storage::{
    JsonFileStore, StoreCartRepository, StoreOrderLedger, StoreUserDirectory,
};
use cartwright::application::handlers::checkout::{PlaceOrderCommand, PlaceOrderHandler};
use cartwright::domain::account::Account;
use cartwright::domain::cart::{Cart, LineItem};
use cartwright::domain::foundation::{ProductId, Username};
use cartwright::ports::{CartRepository, OrderLedger, PasswordHasher, UserDirectory};

fn alice() -> Username {
    Username::new("alice").unwrap()
}

async fn commit_one_order(data_dir: &std::path::Path) {
    let store = Arc::new(JsonFileStore::new(data_dir));
    let directory = Arc::new(StoreUserDirectory::new(store.clone()));
    let carts = Arc::new(StoreCartRepository::new(store.clone()));
    let ledger = Arc::new(StoreOrderLedger::new(store));

    let hasher = SaltedSha256Hasher::new();
    let account = Account::register(
        alice(),
        hasher.hash(&SecretString::new("hunter2".to_string())),
    );
    directory.insert(&account).await.unwrap();

    let mut cart = Cart::new();
    cart.add(
        LineItem::new(ProductId::new(1), "Backpack", "109.95".parse().unwrap(), 1).unwrap(),
    );
    carts.save(&alice(), &cart).await.unwrap();

    let handler = PlaceOrderHandler::new(carts, directory, ledger);
    handler
        .handle(PlaceOrderCommand {
            username: alice(),
            delivery_address: "1 High Street".to_string(),
            payment_method: "credit-card".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn state_survives_a_restart() {
    let data_dir = TempDir::new().unwrap();

    commit_one_order(data_dir.path()).await;

    // "Restart": rebuild every adapter over the same directory
    let store = Arc::new(JsonFileStore::new(data_dir.path()));
    let directory = StoreUserDirectory::new(store.clone());
    let carts = StoreCartRepository::new(store.clone());
    let ledger = StoreOrderLedger::new(store);

    let account = directory.find(&alice()).await.unwrap().unwrap();
    assert_eq!(account.points(), 1);

    let orders = ledger.orders_for(&alice()).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id().as_u64(), 1);

    // The staged cart was cleared before the restart
    assert!(carts.load(&alice()).await.unwrap().is_empty());

    // The counter continues, it does not restart
    assert_eq!(ledger.next_id().await.unwrap().as_u64(), 2);
}

#[tokio::test]
async fn data_directory_layout_is_one_document_per_key() {
    let data_dir = TempDir::new().unwrap();

    commit_one_order(data_dir.path()).await;

    assert!(data_dir.path().join("users.json").exists());
    assert!(data_dir.path().join("orders.json").exists());
    assert!(data_dir.path().join("last_order_id.json").exists());
    // Cleared carts leave no file behind
    assert!(!data_dir.path().join("cart-alice.json").exists());
}
