//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying expenses
//! and summaries in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{expense_json, summary_json};
pub use text::{expense_rows, print_expense_list, print_summary};
