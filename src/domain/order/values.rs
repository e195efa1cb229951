//! Checkout value objects.

use serde::{Deserialize, Serialize};

use super::CheckoutError;

/// Non-empty delivery address, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryAddress(String);

impl DeliveryAddress {
    /// Creates a delivery address from form input.
    ///
    /// # Errors
    ///
    /// - `MissingDeliveryAddress` if the trimmed value is empty
    pub fn new(value: impl Into<String>) -> Result<Self, CheckoutError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(CheckoutError::MissingDeliveryAddress);
        }
        Ok(Self(trimmed))
    }

    /// Returns the address text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Selected payment method, non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethod(String);

impl PaymentMethod {
    /// Creates a payment method from form input.
    ///
    /// # Errors
    ///
    /// - `MissingPaymentMethod` if the trimmed value is empty
    pub fn new(value: impl Into<String>) -> Result<Self, CheckoutError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(CheckoutError::MissingPaymentMethod);
        }
        Ok(Self(trimmed))
    }

    /// Returns the method name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
