//! Account endpoints: sign-up, sign-in, sign-out.

mod dto;
mod handlers;
mod routes;

pub use handlers::AccountHandlers;
pub use routes::account_routes;
