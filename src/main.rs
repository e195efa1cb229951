//! Cartwright server binary.
//!
//! Loads configuration, wires the storage backend and adapters into the
//! application handlers, and serves the storefront API.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use cartwright::adapters::auth::SaltedSha256Hasher;
use cartwright::adapters::catalog::HttpCatalogClient;
use cartwright::adapters::http::account::AccountHandlers;
use cartwright::adapters::http::cart::CartHandlers;
use cartwright::adapters::http::catalog::CatalogHandlers;
use cartwright::adapters::http::checkout::CheckoutHandlers;
use cartwright::adapters::http::orders::OrderHandlers;
use cartwright::adapters::http::{storefront_router, AppState};
use cartwright::adapters::storage::{
    InMemoryKeyValueStore, JsonFileStore, StoreCartRepository, StoreOrderLedger,
    StoreSessionStore, StoreUserDirectory,
};
use cartwright::application::handlers::account::{SignInHandler, SignOutHandler, SignUpHandler};
use cartwright::application::handlers::cart::{AddItemHandler, GetCartHandler};
use cartwright::application::handlers::catalog::ListProductsHandler;
use cartwright::application::handlers::checkout::{PlaceOrderHandler, QuoteCheckoutHandler};
use cartwright::application::handlers::orders::OrderHistoryHandler;
use cartwright::config::{AppConfig, StorageBackend};
use cartwright::ports::{
    CartRepository, CatalogClient, KeyValueStore, OrderLedger, PasswordHasher, SessionStore,
    UserDirectory,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    // Storage backend and the repositories over it
    let store: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StorageBackend::File => Arc::new(JsonFileStore::new(&config.storage.data_dir)),
    };

    let directory: Arc<dyn UserDirectory> = Arc::new(StoreUserDirectory::new(store.clone()));
    let sessions: Arc<dyn SessionStore> = Arc::new(StoreSessionStore::new(store.clone()));
    let carts: Arc<dyn CartRepository> = Arc::new(StoreCartRepository::new(store.clone()));
    let ledger: Arc<dyn OrderLedger> = Arc::new(StoreOrderLedger::new(store));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(SaltedSha256Hasher::new());
    let catalog: Arc<dyn CatalogClient> = Arc::new(HttpCatalogClient::new(&config.catalog)?);

    // Application handlers behind their HTTP state
    let state = AppState {
        account: AccountHandlers::new(
            Arc::new(SignUpHandler::new(directory.clone(), hasher.clone())),
            Arc::new(SignInHandler::new(
                directory.clone(),
                hasher,
                sessions.clone(),
            )),
            Arc::new(SignOutHandler::new(sessions.clone())),
        ),
        cart: CartHandlers::new(
            Arc::new(AddItemHandler::new(carts.clone())),
            Arc::new(GetCartHandler::new(carts.clone())),
        ),
        checkout: CheckoutHandlers::new(
            Arc::new(QuoteCheckoutHandler::new(carts.clone(), directory.clone())),
            Arc::new(PlaceOrderHandler::new(
                carts,
                directory.clone(),
                ledger.clone(),
            )),
        ),
        orders: OrderHandlers::new(Arc::new(OrderHistoryHandler::new(directory, ledger))),
        catalog: CatalogHandlers::new(Arc::new(ListProductsHandler::new(catalog))),
        sessions,
    };

    let mut app = storefront_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            ))),
    );

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if !origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr = config.server.socket_addr();
    tracing::info!(%addr, backend = ?config.storage.backend, "starting storefront server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
