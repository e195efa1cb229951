//! Integration tests for the full storefront command path.
//!
//! These tests wire the real application handlers over the in-memory
//! key-value store and walk the storefront flow end to end:
//! sign-up → sign-in → add to cart → quote → place order → order history.

use std::sync::Arc;

use secrecy::SecretString;

use cartwright::adapters::auth::SaltedSha256Hasher;
use cartwright::adapters::storage::{
    InMemoryKeyValueStore, StoreCartRepository, StoreOrderLedger, StoreSessionStore,
    StoreUserDirectory,
};
use cartwright::application::handlers::account::{
    SignInCommand, SignInHandler, SignOutCommand, SignOutHandler, SignUpCommand, SignUpHandler,
};
use cartwright::application::handlers::cart::{AddItemCommand, AddItemHandler};
use cartwright::application::handlers::checkout::{
    PlaceOrderCommand, PlaceOrderHandler, QuoteCheckoutHandler, QuoteCheckoutQuery,
};
use cartwright::application::handlers::orders::{OrderHistoryHandler, OrderHistoryQuery};
use cartwright::domain::account::AccountError;
use cartwright::domain::foundation::{ProductId, Username};
use cartwright::domain::membership::MembershipTier;
use cartwright::domain::order::CheckoutError;
use cartwright::ports::SessionStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Storefront {
    sessions: Arc<StoreSessionStore>,
    sign_up: SignUpHandler,
    sign_in: SignInHandler,
    sign_out: SignOutHandler,
    add_item: AddItemHandler,
    quote: QuoteCheckoutHandler,
    place_order: PlaceOrderHandler,
    order_history: OrderHistoryHandler,
}

/// Wires every handler over one shared in-memory store.
fn storefront() -> Storefront {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let directory = Arc::new(StoreUserDirectory::new(store.clone()));
    let sessions = Arc::new(StoreSessionStore::new(store.clone()));
    let carts = Arc::new(StoreCartRepository::new(store.clone()));
    let ledger = Arc::new(StoreOrderLedger::new(store));
    let hasher = Arc::new(SaltedSha256Hasher::new());

    Storefront {
        sessions: sessions.clone(),
        sign_up: SignUpHandler::new(directory.clone(), hasher.clone()),
        sign_in: SignInHandler::new(directory.clone(), hasher, sessions.clone()),
        sign_out: SignOutHandler::new(sessions),
        add_item: AddItemHandler::new(carts.clone()),
        quote: QuoteCheckoutHandler::new(carts.clone(), directory.clone()),
        place_order: PlaceOrderHandler::new(carts, directory.clone(), ledger.clone()),
        order_history: OrderHistoryHandler::new(directory, ledger),
    }
}

fn sign_up_cmd(username: &str) -> SignUpCommand {
    SignUpCommand {
        username: username.to_string(),
        password: SecretString::new("hunter2".to_string()),
    }
}

fn sign_in_cmd(username: &str) -> SignInCommand {
    SignInCommand {
        username: username.to_string(),
        password: SecretString::new("hunter2".to_string()),
    }
}

fn add_cmd(username: &Username, id: u64, title: &str, price: &str) -> AddItemCommand {
    AddItemCommand {
        username: username.clone(),
        product_id: ProductId::new(id),
        title: title.to_string(),
        price: price.parse().unwrap(),
        quantity: 1,
    }
}

fn place_cmd(username: &Username) -> PlaceOrderCommand {
    PlaceOrderCommand {
        username: username.clone(),
        delivery_address: "1 High Street".to_string(),
        payment_method: "credit-card".to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_storefront_flow() {
    let app = storefront();

    // Sign up and sign in
    app.sign_up.handle(sign_up_cmd("alice")).await.unwrap();
    let session = app.sign_in.handle(sign_in_cmd("alice")).await.unwrap();
    let alice = session.account.username().clone();

    assert_eq!(session.account.membership(), MembershipTier::Bronze);
    assert_eq!(
        app.sessions.resolve(&session.token).await.unwrap().unwrap(),
        alice
    );

    // Stage three units across two products; the duplicate add merges
    app.add_item
        .handle(add_cmd(&alice, 1, "Backpack", "10.00"))
        .await
        .unwrap();
    app.add_item
        .handle(add_cmd(&alice, 1, "Backpack", "10.00"))
        .await
        .unwrap();
    let staged = app
        .add_item
        .handle(add_cmd(&alice, 2, "Mug", "5.00"))
        .await
        .unwrap();
    assert_eq!(staged.cart.line_count(), 2);
    assert_eq!(staged.cart.total_quantity(), 3);

    // Quote at bronze: subtotal 25.00, shipping 3 x 1.00, total 28.00
    let quoted = app
        .quote
        .handle(QuoteCheckoutQuery {
            username: alice.clone(),
        })
        .await
        .unwrap();
    assert_eq!(quoted.quote.subtotal(), "25.00".parse().unwrap());
    assert_eq!(quoted.quote.shipping(), "3.00".parse().unwrap());
    assert_eq!(quoted.quote.total(), "28.00".parse().unwrap());

    // Commit the order
    let placed = app.place_order.handle(place_cmd(&alice)).await.unwrap();
    assert_eq!(placed.order.id().as_u64(), 1);
    assert_eq!(placed.order.total(), "28.00".parse().unwrap());

    // The cart is cleared: a new quote reports an empty cart
    let requote = app
        .quote
        .handle(QuoteCheckoutQuery {
            username: alice.clone(),
        })
        .await
        .unwrap_err();
    assert_eq!(requote, CheckoutError::EmptyCart);

    // The order shows up in the history
    let history = app
        .order_history
        .handle(OrderHistoryQuery {
            username: alice.clone(),
        })
        .await
        .unwrap();
    assert_eq!(history.orders.len(), 1);
    assert_eq!(history.orders[0].id().as_u64(), 1);
    assert_eq!(history.orders[0].items().len(), 2);
}

#[tokio::test]
async fn duplicate_sign_up_keeps_one_directory_entry() {
    let app = storefront();

    app.sign_up.handle(sign_up_cmd("alice")).await.unwrap();
    let err = app.sign_up.handle(sign_up_cmd("alice")).await.unwrap_err();

    assert!(matches!(err, AccountError::UsernameTaken(_)));

    // The original registration still signs in
    assert!(app.sign_in.handle(sign_in_cmd("alice")).await.is_ok());
}

#[tokio::test]
async fn order_ids_stay_unique_across_accounts() {
    let app = storefront();

    for name in ["alice", "bob"] {
        app.sign_up.handle(sign_up_cmd(name)).await.unwrap();
    }
    let alice = Username::new("alice").unwrap();
    let bob = Username::new("bob").unwrap();

    app.add_item
        .handle(add_cmd(&alice, 1, "Backpack", "10.00"))
        .await
        .unwrap();
    app.add_item
        .handle(add_cmd(&bob, 2, "Mug", "5.00"))
        .await
        .unwrap();

    let first = app.place_order.handle(place_cmd(&alice)).await.unwrap();
    let second = app.place_order.handle(place_cmd(&bob)).await.unwrap();

    assert_eq!(first.order.id().as_u64(), 1);
    assert_eq!(second.order.id().as_u64(), 2);

    // Each account sees only its own order
    let alice_history = app
        .order_history
        .handle(OrderHistoryQuery { username: alice })
        .await
        .unwrap();
    assert_eq!(alice_history.orders.len(), 1);
    assert_eq!(alice_history.orders[0].id().as_u64(), 1);
}

#[tokio::test]
async fn points_accumulate_across_orders() {
    let app = storefront();

    app.sign_up.handle(sign_up_cmd("alice")).await.unwrap();
    let alice = Username::new("alice").unwrap();

    // Two orders of 150.00 in goods each earn one point apiece
    for _ in 0..2 {
        app.add_item
            .handle(add_cmd(&alice, 1, "Premium Widget", "150.00"))
            .await
            .unwrap();
        let placed = app.place_order.handle(place_cmd(&alice)).await.unwrap();
        assert_eq!(placed.points_earned, 1);
    }

    let history = app
        .order_history
        .handle(OrderHistoryQuery { username: alice })
        .await
        .unwrap();
    assert_eq!(history.account.points(), 2);
}

#[tokio::test]
async fn checkout_without_items_is_rejected() {
    let app = storefront();

    app.sign_up.handle(sign_up_cmd("alice")).await.unwrap();
    let alice = Username::new("alice").unwrap();

    let err = app.place_order.handle(place_cmd(&alice)).await.unwrap_err();
    assert_eq!(err, CheckoutError::EmptyCart);

    let history = app
        .order_history
        .handle(OrderHistoryQuery { username: alice })
        .await
        .unwrap();
    assert!(history.orders.is_empty());
}

#[tokio::test]
async fn sign_out_revokes_the_session() {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let directory = Arc::new(StoreUserDirectory::new(store.clone()));
    let sessions = Arc::new(StoreSessionStore::new(store));
    let hasher = Arc::new(SaltedSha256Hasher::new());

    let sign_up = SignUpHandler::new(directory.clone(), hasher.clone());
    let sign_in = SignInHandler::new(directory, hasher, sessions.clone());
    let sign_out = SignOutHandler::new(sessions.clone());

    sign_up.handle(sign_up_cmd("alice")).await.unwrap();
    let session = sign_in.handle(sign_in_cmd("alice")).await.unwrap();

    sign_out
        .handle(SignOutCommand {
            token: session.token,
        })
        .await
        .unwrap();

    assert!(sessions.resolve(&session.token).await.unwrap().is_none());
}
