//! # Expense Core
//!
//! Core library for Expenses - a small, local, single-user expense tracker.
//!
//! This crate provides the ledger store, the expense data model, input
//! validation and CSV export, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Store trait and the SQLite implementation
//! - **validation**: Checks applied to user input before it reaches the store
//! - **export**: CSV export (and re-import for verification)
//! - **fs**: Filesystem helpers for atomic writes

pub mod error;
pub mod export;
pub mod fs;
pub mod storage;
pub mod validation;

pub use error::{ExpenseError, Result};
pub use storage::{
    CategoryTotal, Expense, ExpenseFilter, ExpenseStore, NewExpense, SqliteStore, YearMonth,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
