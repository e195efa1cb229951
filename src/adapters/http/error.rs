//! Shared HTTP error rendering.
//!
//! Every failed request renders as a JSON body with a stable error code and
//! a user-facing message, at a status derived from the code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.to_string(),
        }
    }
}

/// Maps a domain error code to an HTTP status.
pub(super) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::InvalidFormat
        | ErrorCode::EmptyCart
        | ErrorCode::InvalidCartData
        | ErrorCode::MissingDeliveryAddress
        | ErrorCode::MissingPaymentMethod => StatusCode::BAD_REQUEST,
        ErrorCode::UsernameTaken => StatusCode::CONFLICT,
        ErrorCode::InvalidCredentials | ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::AccountNotFound => StatusCode::NOT_FOUND,
        ErrorCode::CatalogFetchFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders a domain error code and message as a JSON response.
pub(super) fn error_response(code: ErrorCode, message: impl Into<String>) -> Response {
    (status_for(code), Json(ErrorResponse::new(code, message))).into_response()
}
