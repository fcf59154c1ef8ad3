//! Expense store trait definition.
//!
//! The `ExpenseStore` trait is the boundary between the ledger and whatever
//! presents it. Implementations own their backing resource for their whole
//! lifetime and commit every write immediately.

use std::path::Path;

use super::types::{CategoryTotal, Expense, ExpenseFilter, NewExpense, YearMonth};
use crate::error::Result;

/// Storage interface for the expense ledger.
///
/// All implementations must ensure:
/// - Identifiers are unique and never reused
/// - Records are never modified after insertion
/// - Each write is durable when the call returns
pub trait ExpenseStore {
    /// Open the ledger at `path`, creating it if needed.
    ///
    /// Safe to call against an existing ledger.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Storage` if the file cannot be opened or the
    /// schema cannot be created.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Path of the backing file.
    fn path(&self) -> &Path;

    /// Insert a new expense, stamping it with the current UTC time.
    ///
    /// The input is stored as given; no validation happens here.
    ///
    /// # Returns
    ///
    /// Returns the identifier assigned to the new record.
    fn add(&mut self, expense: &NewExpense) -> Result<i64>;

    /// Delete the expense with the given ID.
    ///
    /// # Returns
    ///
    /// Returns `true` if a record was removed, `false` if none existed.
    fn delete(&mut self, id: i64) -> Result<bool>;

    /// Get an expense by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(expense))` if found, `Ok(None)` if not found.
    fn get(&self, id: i64) -> Result<Option<Expense>>;

    /// List expenses matching the filter, newest date first.
    fn list(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>>;

    /// Sum amounts per category, optionally restricted to one month.
    ///
    /// Categories with no matching records are absent from the result.
    fn summarize(&self, month: Option<&YearMonth>) -> Result<Vec<CategoryTotal>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_expense_store<T: ExpenseStore>(_store: T) {}
    }
}
