//! CSV export of the expense ledger.
//!
//! The export carries every column under a fixed header. `created_at` is
//! written exactly as stored, so re-reading a file yields the same records.

use std::io::{self, Write};
use std::path::Path;

use crate::error::{ExpenseError, Result};
use crate::storage::Expense;

/// Header row written at the top of every export.
pub const EXPORT_HEADER: [&str; 6] = [
    "id",
    "date",
    "category",
    "description",
    "amount",
    "created_at",
];

/// Write expenses as CSV to any writer, header first, in the given order.
pub fn write_csv<W: Write>(expenses: &[Expense], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_HEADER)?;
    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.date.clone(),
            expense.category.clone(),
            expense.description.clone(),
            expense.amount.to_string(),
            expense.created_at.clone(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export expenses to a CSV file.
///
/// Nothing is written when `expenses` is empty. Otherwise the file is
/// replaced atomically.
///
/// # Returns
///
/// Returns the number of rows written.
pub fn export_csv(expenses: &[Expense], path: &Path) -> Result<usize> {
    if expenses.is_empty() {
        tracing::debug!(path = %path.display(), "nothing to export");
        return Ok(0);
    }

    crate::fs::write_atomic(path, |file| {
        write_csv(expenses, &mut *file).map_err(|e| io::Error::other(e.to_string()))
    })
    .map_err(|e| ExpenseError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), rows = expenses.len(), "exported expenses");
    Ok(expenses.len())
}

/// Read a CSV file produced by [`export_csv`].
///
/// # Errors
///
/// Returns `ExpenseError::Export` if the header differs from
/// [`EXPORT_HEADER`] or a row cannot be decoded.
pub fn read_csv(path: &Path) -> Result<Vec<Expense>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?;
    if headers.iter().ne(EXPORT_HEADER.iter().copied()) {
        return Err(ExpenseError::Export(format!(
            "Unexpected CSV header in {}: {}",
            path.display(),
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut expenses = Vec::new();
    for record in reader.deserialize() {
        expenses.push(record?);
    }
    Ok(expenses)
}
