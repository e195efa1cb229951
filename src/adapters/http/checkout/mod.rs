//! Checkout endpoints: quote and place-order.

mod dto;
mod handlers;
mod routes;

pub use handlers::CheckoutHandlers;
pub use routes::checkout_routes;
