//! Error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (amounts, item names) for the UI layer
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a detail entry
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }

    /// Whether the operator should see this error as a rejected action
    pub fn is_user_facing(&self) -> bool {
        self.code.category().is_user_facing()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }

    /// Create an empty bill error
    pub fn empty_bill() -> Self {
        Self::new(ErrorCode::OrderEmpty)
    }

    /// Create an unknown menu item error
    pub fn menu_item_not_found(name: impl Into<String>) -> Self {
        let n = name.into();
        Self::with_message(
            ErrorCode::MenuItemNotFound,
            format!("Menu item '{}' not found", n),
        )
        .with_detail("item", n)
    }

    /// Create an insufficient payment error
    pub fn insufficient_payment(received: i64, due: i64) -> Self {
        Self::new(ErrorCode::PaymentInsufficientAmount)
            .with_detail("received", received)
            .with_detail("due", due)
    }

    /// Create a nothing-to-export notice
    pub fn nothing_to_export() -> Self {
        Self::new(ErrorCode::NothingToExport)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
