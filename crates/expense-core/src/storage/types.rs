//! Core data types for the storage layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, Result};
use crate::validation;

/// One recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier, never reused
    pub id: i64,

    /// Calendar date, `YYYY-MM-DD` by convention (not enforced by the store)
    pub date: String,

    /// Free-text category label
    pub category: String,

    /// Free-text description
    pub description: String,

    /// Signed amount
    pub amount: f64,

    /// When the record was inserted, exactly as stored
    pub created_at: String,
}

impl Expense {
    /// The insertion time as a UTC timestamp.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Storage` if the stored text is not a timestamp.
    pub fn created_at_utc(&self) -> Result<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Parse a stored timestamp.
///
/// RFC 3339 is what this crate writes. Naive ISO-8601 timestamps without an
/// offset are also accepted and read as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| ExpenseError::Storage(format!("Invalid timestamp {:?}: {}", value, e)))
}

/// Input for creating a new expense.
///
/// The store persists these fields as given. Use [`NewExpense::from_input`]
/// to build one from raw user input with validation applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

impl NewExpense {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// Build a new expense from raw form input.
    ///
    /// The amount is checked first, then the date. A blank category becomes
    /// `"Other"` and the description is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Validation` with a user-facing message if the
    /// amount or date is rejected.
    pub fn from_input(date: &str, category: &str, description: &str, amount: &str) -> Result<Self> {
        let amount = validation::parse_amount(amount)?;
        let date = validation::validate_date(date)?;
        Ok(Self {
            date,
            category: validation::normalize_category(category),
            description: description.trim().to_string(),
            amount,
        })
    }
}

/// A calendar month in `YYYY-MM` form, compared against the first seven
/// characters of an expense date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearMonth(String);

impl YearMonth {
    /// Parse a strict year-month: exactly seven characters naming a real month.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Validation` ("Use YYYY-MM") otherwise.
    pub fn parse(value: &str) -> Result<Self> {
        validation::validate_year_month(value).map(Self)
    }

    /// Recognise the `NNNN-NN` shape used by the filter box.
    ///
    /// Only the length and the separator position are checked, so a value
    /// like `"2024-13"` is accepted here and simply matches nothing.
    pub fn from_shape(value: &str) -> Option<Self> {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() == 7 && chars[4] == '-' {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for YearMonth {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Filter for listing expenses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExpenseFilter {
    /// Every record
    #[default]
    All,

    /// Records whose date starts with the given year-month
    Month(YearMonth),

    /// Records whose category, date or description contains the text
    /// (ASCII case-insensitive, matched literally)
    Substring(String),
}

impl ExpenseFilter {
    /// Translate free filter text into a filter.
    ///
    /// Blank text lists everything, a `YYYY-MM` shaped value selects that
    /// month, and anything else is a substring search.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::All;
        }
        match YearMonth::from_shape(trimmed) {
            Some(month) => Self::Month(month),
            None => Self::Substring(trimmed.to_string()),
        }
    }
}

/// Sum of amounts for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Grand total across a summary.
pub fn summary_total(totals: &[CategoryTotal]) -> f64 {
    totals.iter().map(|row| row.total).sum()
}
