//! Custom error types for the household budget ledger
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Rejected user input (no mutation was performed)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Summary period other than monthly or yearly
    #[error("Invalid period '{0}'. Choose 'monthly' or 'yearly'.")]
    InvalidPeriod(String),

    /// Store read/write errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Check if this error rejected user input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidPeriod(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_period_display() {
        let err = BudgetError::InvalidPeriod("weekly".into());
        assert_eq!(
            err.to_string(),
            "Invalid period 'weekly'. Choose 'monthly' or 'yearly'."
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
        assert!(!budget_err.is_validation());
    }
}
