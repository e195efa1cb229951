//! HTTP routes for account endpoints.

use axum::{routing::post, Router};

use super::handlers::{sign_in, sign_out, sign_up, AccountHandlers};

/// Creates the account router with all endpoints.
pub fn account_routes(handlers: AccountHandlers) -> Router {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/signin", post(sign_in))
        .route("/signout", post(sign_out))
        .with_state(handlers)
}
