//! Order-history endpoints: the profile page.

mod dto;
mod handlers;
mod routes;

pub use dto::{OrderHistoryResponse, OrderItemResponse, OrderResponse};
pub use handlers::OrderHandlers;
pub use routes::order_routes;
