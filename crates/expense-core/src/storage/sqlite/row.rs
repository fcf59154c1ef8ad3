//! Expense row type for database queries.

use crate::error::{ExpenseError, Result};
use crate::storage::types::Expense;

/// Column list shared by every query that decodes an [`ExpenseRow`].
pub const EXPENSE_COLUMNS: &str = "id, date, category, description, amount, created_at";

/// Raw row data from the expenses table, before parsing into domain types.
///
/// Text columns are nullable in the schema, so they are read as options.
#[derive(Debug)]
pub struct ExpenseRow {
    pub id: i64,
    pub date: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub created_at: Option<String>,
}

impl ExpenseRow {
    /// Read a row selected with [`EXPENSE_COLUMNS`].
    pub fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            category: row.get(2)?,
            description: row.get(3)?,
            amount: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

impl TryFrom<ExpenseRow> for Expense {
    type Error = ExpenseError;

    fn try_from(row: ExpenseRow) -> Result<Self> {
        let amount = row.amount.ok_or_else(|| {
            ExpenseError::Storage(format!("Expense {} has no amount", row.id))
        })?;
        let created_at = row.created_at.ok_or_else(|| {
            ExpenseError::Storage(format!("Expense {} has no created_at", row.id))
        })?;

        Ok(Expense {
            id: row.id,
            date: row.date.unwrap_or_default(),
            category: row.category.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            amount,
            created_at,
        })
    }
}
