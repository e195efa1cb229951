//! Cart endpoints: staging items and reading the staged cart.

mod dto;
mod handlers;
mod routes;

pub use dto::{CartItemResponse, CartResponse};
pub use handlers::CartHandlers;
pub use routes::cart_routes;
