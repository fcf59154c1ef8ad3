//! SQLite storage backend.
//!
//! The ledger is a plain SQLite file with a single `expenses` table. Every
//! statement runs in SQLite's autocommit mode, so each call is durable when
//! it returns.

mod row;

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension};

use crate::error::{ExpenseError, Result};
use crate::storage::traits::ExpenseStore;
use crate::storage::types::{CategoryTotal, Expense, ExpenseFilter, NewExpense, YearMonth};

use row::{ExpenseRow, EXPENSE_COLUMNS};

/// Ledgers created by older tools lack `AUTOINCREMENT` but share every column,
/// so `IF NOT EXISTS` lets them open unchanged.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT,
        category TEXT,
        description TEXT,
        amount REAL,
        created_at TEXT
    );
"#;

/// SQLite-backed expense store.
///
/// Owns its connection for its whole lifetime; dropping the store closes it.
pub struct SqliteStore {
    path: PathBuf,
    conn: Connection,
}

impl SqliteStore {
    fn sqlite_error(err: rusqlite::Error) -> ExpenseError {
        ExpenseError::Storage(format!("SQLite error: {}", err))
    }

    fn collect_rows<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Expense>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, ExpenseRow::from_sql)?;

        let mut expenses = Vec::new();
        for row in rows {
            expenses.push(row?.try_into()?);
        }
        Ok(expenses)
    }
}

/// Escape `LIKE` wildcards so the needle matches literally with `ESCAPE '\'`.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl ExpenseStore for SqliteStore {
    fn open(path: &Path) -> Result<Self> {
        let existed = path.exists();
        let conn = Connection::open(path).map_err(Self::sqlite_error)?;
        conn.execute_batch(SCHEMA)?;

        if existed {
            tracing::debug!(path = %path.display(), "opened expense ledger");
        } else {
            tracing::info!(path = %path.display(), "created expense ledger");
        }

        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn add(&mut self, expense: &NewExpense) -> Result<i64> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        self.conn.execute(
            r#"
            INSERT INTO expenses (date, category, description, amount, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            (
                &expense.date,
                &expense.category,
                &expense.description,
                expense.amount,
                &created_at,
            ),
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, date = %expense.date, category = %expense.category, "added expense");
        Ok(id)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", [id])?;
        tracing::debug!(id, removed, "deleted expense");
        Ok(removed > 0)
    }

    fn get(&self, id: i64) -> Result<Option<Expense>> {
        let sql = format!("SELECT {} FROM expenses WHERE id = ?1", EXPENSE_COLUMNS);
        let row = self
            .conn
            .query_row(&sql, [id], ExpenseRow::from_sql)
            .optional()?;
        row.map(Expense::try_from).transpose()
    }

    fn list(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let mut sql = format!("SELECT {} FROM expenses", EXPENSE_COLUMNS);
        let order = " ORDER BY date DESC, id DESC";

        let expenses = match filter {
            ExpenseFilter::All => {
                sql.push_str(order);
                self.collect_rows(&sql, rusqlite::params![])?
            }
            ExpenseFilter::Month(month) => {
                sql.push_str(" WHERE substr(date, 1, 7) = ?1");
                sql.push_str(order);
                self.collect_rows(&sql, [month.as_str()])?
            }
            ExpenseFilter::Substring(needle) => {
                sql.push_str(
                    " WHERE category LIKE ?1 ESCAPE '\\' \
                     OR date LIKE ?1 ESCAPE '\\' \
                     OR description LIKE ?1 ESCAPE '\\'",
                );
                sql.push_str(order);
                self.collect_rows(&sql, [like_pattern(needle)])?
            }
        };

        tracing::debug!(?filter, count = expenses.len(), "listed expenses");
        Ok(expenses)
    }

    fn summarize(&self, month: Option<&YearMonth>) -> Result<Vec<CategoryTotal>> {
        let mut sql = String::from("SELECT category, SUM(amount) FROM expenses");
        if month.is_some() {
            sql.push_str(" WHERE substr(date, 1, 7) = ?1");
        }
        sql.push_str(" GROUP BY category ORDER BY category");

        let mut stmt = self.conn.prepare(&sql)?;
        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<CategoryTotal> {
            Ok(CategoryTotal {
                category: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                total: row.get::<_, Option<f64>>(1)?.unwrap_or(0.0),
            })
        };
        let rows = match month {
            Some(ym) => stmt.query_map([ym.as_str()], map_row)?,
            None => stmt.query_map(rusqlite::params![], map_row)?,
        };

        let mut totals = Vec::new();
        for row in rows {
            totals.push(row?);
        }

        tracing::debug!(
            month = ?month.map(YearMonth::as_str),
            categories = totals.len(),
            "summarized expenses"
        );
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("food"), "%food%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }

    #[test]
    fn test_open_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.db");

        let mut store = SqliteStore::open(&path).unwrap();
        store
            .add(&NewExpense::new("2024-05-01", "Food", "lunch", 12.5))
            .unwrap();
        drop(store);

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.list(&ExpenseFilter::All).unwrap().len(), 1);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_opens_ledger_without_autoincrement() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("legacy.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE expenses (id INTEGER PRIMARY KEY, date TEXT, category TEXT, \
                 description TEXT, amount REAL, created_at TEXT);
                 INSERT INTO expenses (date, category, description, amount, created_at)
                 VALUES ('2024-04-02', 'Travel', 'bus', 2.4, '2024-04-02T09:00:00.000001');",
            )
            .unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let expenses = store.list(&ExpenseFilter::All).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, "Travel");
        assert_eq!(expenses[0].amount, 2.4);
    }
}
