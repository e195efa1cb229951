//! HTTP adapters - REST API implementations.
//!
//! The "UI layer" of the storefront: thin routers and DTOs that dispatch
//! into the application handlers and render their results as JSON. Each
//! domain module has its own router.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
mod error;
pub mod middleware;
pub mod orders;
mod router;

pub use error::ErrorResponse;
pub use router::{storefront_router, AppState};
