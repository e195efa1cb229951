//! Checkout-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while quoting or committing a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The staged cart has no items.
    EmptyCart,
    /// The stored cart could not be decoded; it has been discarded.
    InvalidCartData,
    /// No delivery address was supplied.
    MissingDeliveryAddress,
    /// No payment method was selected.
    MissingPaymentMethod,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl CheckoutError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CheckoutError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::EmptyCart => ErrorCode::EmptyCart,
            CheckoutError::InvalidCartData => ErrorCode::InvalidCartData,
            CheckoutError::MissingDeliveryAddress => ErrorCode::MissingDeliveryAddress,
            CheckoutError::MissingPaymentMethod => ErrorCode::MissingPaymentMethod,
            CheckoutError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CheckoutError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CheckoutError::EmptyCart => {
                "Your cart is empty. Add items before proceeding to checkout.".to_string()
            }
            CheckoutError::InvalidCartData => {
                "Cart data is invalid. Please try adding items again.".to_string()
            }
            CheckoutError::MissingDeliveryAddress => "Please enter a delivery address.".to_string(),
            CheckoutError::MissingPaymentMethod => "Please select a payment method.".to_string(),
            CheckoutError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CheckoutError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CheckoutError {}

impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        CheckoutError::ValidationFailed {
            field: "input".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for CheckoutError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => CheckoutError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            _ => CheckoutError::Infrastructure(err.to_string()),
        }
    }
}
