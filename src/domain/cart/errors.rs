//! Cart-specific error types.

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised by cart commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The stored cart could not be decoded; it has been discarded.
    InvalidCartData,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl CartError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CartError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CartError::InvalidCartData => ErrorCode::InvalidCartData,
            CartError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CartError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CartError::InvalidCartData => {
                "Cart data is invalid. Please try adding items again.".to_string()
            }
            CartError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CartError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CartError {}

impl From<ValidationError> for CartError {
    fn from(err: ValidationError) -> Self {
        CartError::ValidationFailed {
            field: "input".to_string(),
            message: err.to_string(),
        }
    }
}
