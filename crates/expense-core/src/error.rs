//! Error types for expense core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for expense operations.
pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Core error type for expense operations.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// User input rejected before reaching the store
    #[error("{0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV export or import error
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Whether this error was caused by input validation rather than a fault.
    pub fn is_validation(&self) -> bool {
        matches!(self, ExpenseError::Validation(_))
    }
}

impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        ExpenseError::Storage(format!("SQLite error: {}", err))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        ExpenseError::Export(err.to_string())
    }
}
