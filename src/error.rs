//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every ledger validation failure is an
//! ordinary, expected outcome and surfaces synchronously to the caller.

use thiserror::Error;

use crate::models::Money;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A negative magnitude was supplied where only non-negative amounts are valid
    #[error("Invalid amount: {amount} (amounts must not be negative)")]
    InvalidAmount { amount: Money },

    /// A saving goal was created or edited with a non-positive target
    #[error("Invalid target: {target} (goal targets must be positive)")]
    InvalidTarget { target: Money },

    /// An allocation referenced a goal not owned by the given account
    #[error("Goal '{goal}' does not belong to account '{account}'")]
    InvalidGoal { goal: String, account: String },

    /// An allocation amount exceeds the account's balance at check time
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Money,
        available: Money,
    },
}

impl FintrackError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for operations
    pub fn operation_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Operation",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for saving goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Saving goal",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for planned purchases
    pub fn planned_purchase_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Planned purchase",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = FintrackError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = FintrackError::account_not_found("Checking");
        assert_eq!(err.to_string(), "Account not found: Checking");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = FintrackError::InvalidAmount {
            amount: Money::new(dec!(-5.00)),
        };
        assert_eq!(
            err.to_string(),
            "Invalid amount: -5.00 (amounts must not be negative)"
        );
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = FintrackError::InsufficientFunds {
            requested: Money::new(dec!(100.00)),
            available: Money::new(dec!(70.00)),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 100.00, available 70.00"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let fintrack_err: FintrackError = io_err.into();
        assert!(matches!(fintrack_err, FintrackError::Io(_)));
    }
}
