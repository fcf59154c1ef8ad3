//! Storage layer for the expense ledger.

mod sqlite;
mod traits;
mod types;

pub use sqlite::SqliteStore;
pub use traits::ExpenseStore;
pub use types::{summary_total, CategoryTotal, Expense, ExpenseFilter, NewExpense, YearMonth};
