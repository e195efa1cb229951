//! Account-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, Username, ValidationError};

/// Account-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The username is already registered.
    UsernameTaken(Username),
    /// No account matches the supplied credentials.
    InvalidCredentials,
    /// Account was not found.
    NotFound(Username),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl AccountError {
    pub fn username_taken(username: Username) -> Self {
        AccountError::UsernameTaken(username)
    }

    pub fn invalid_credentials() -> Self {
        AccountError::InvalidCredentials
    }

    pub fn not_found(username: Username) -> Self {
        AccountError::NotFound(username)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccountError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::UsernameTaken(_) => ErrorCode::UsernameTaken,
            AccountError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AccountError::NotFound(_) => ErrorCode::AccountNotFound,
            AccountError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AccountError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AccountError::UsernameTaken(username) => {
                format!("Username already exists: {}", username)
            }
            AccountError::InvalidCredentials => "Invalid credentials".to_string(),
            AccountError::NotFound(username) => format!("Account not found: {}", username),
            AccountError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AccountError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AccountError {}

impl From<ValidationError> for AccountError {
    fn from(err: ValidationError) -> Self {
        AccountError::ValidationFailed {
            field: "input".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::AccountNotFound => AccountError::InvalidCredentials,
            ErrorCode::ValidationFailed => AccountError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            _ => AccountError::Infrastructure(err.to_string()),
        }
    }
}
