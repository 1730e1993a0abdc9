//! Custom error types for Bankbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{AccountType, Money};

/// The main error type for Bankbook operations
#[derive(Error, Debug)]
pub enum BankbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed input fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credential did not match
    #[error("Authentication failed: {0}")]
    Authorization(String),

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

    /// Deposit or withdrawal amount was zero or negative
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// Withdrawal would leave the balance under the account type's floor
    #[error("Minimum balance requirement not met: {account_type} accounts must keep at least {required}")]
    BelowMinimumBalance {
        account_type: AccountType,
        required: Money,
    },

    /// Withdrawal exceeds the balance
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BankbookError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
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

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Authorization(_))
    }

    /// Check if the operation was refused by a balance or amount rule
    pub fn is_policy_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::BelowMinimumBalance { .. } | Self::InsufficientFunds { .. }
        )
    }
}

impl From<std::io::Error> for BankbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Bankbook operations
pub type BankbookResult<T> = Result<T, BankbookError>;
