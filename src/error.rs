//! Custom error types for spendcap
//!
//! This module defines the error hierarchy for the ledger engine using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

use crate::models::{Money, Period};

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors (e.g. data directory resolution)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors for candidate expenses and budget caps
    #[error("Validation error: {0}")]
    Validation(String),

    /// A candidate expense would push the period's spend past its cap
    #[error(
        "budget exceeded for period {period}: cap {cap}, already spent {spent}, attempted {attempted}"
    )]
    BudgetExceeded {
        period: Period,
        cap: Money,
        spent: Money,
        attempted: Money,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The backing record exists but cannot be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// File I/O errors from the storage layer
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(id: u64) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: id.to_string(),
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

    /// Check if this is a budget rejection
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, Self::BudgetExceeded { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Validation("description must not be empty".into());
        assert_eq!(
            err.to_string(),
            "Validation error: description must not be empty"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::expense_not_found(7);
        assert_eq!(err.to_string(), "Expense not found: 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_budget_exceeded_error() {
        let err = LedgerError::BudgetExceeded {
            period: Period::new(5).unwrap(),
            cap: Money::from_cents(10_000),
            spent: Money::from_cents(8_000),
            attempted: Money::from_cents(2_500),
        };
        assert_eq!(
            err.to_string(),
            "budget exceeded for period 05: cap $100.00, already spent $80.00, attempted $25.00"
        );
        assert!(err.is_budget_exceeded());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Storage(_)));
    }
}
