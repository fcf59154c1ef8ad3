//! Input validation applied before anything reaches the store.
//!
//! The store itself accepts whatever it is given; these checks belong to
//! callers that take raw user input.

use chrono::NaiveDate;

use crate::error::{ExpenseError, Result};

/// Category stored when the user leaves it blank.
pub const DEFAULT_CATEGORY: &str = "Other";

const AMOUNT_MESSAGE: &str = "Enter valid amount";
const DATE_MESSAGE: &str = "Date format YYYY-MM-DD";
const YEAR_MONTH_MESSAGE: &str = "Use YYYY-MM";

/// Parse an amount typed by the user.
///
/// Surrounding whitespace is ignored. Values that do not parse as a number,
/// or that are not finite, are rejected.
pub fn parse_amount(value: &str) -> Result<f64> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| ExpenseError::Validation(AMOUNT_MESSAGE.to_string()))?;
    if !amount.is_finite() {
        return Err(ExpenseError::Validation(AMOUNT_MESSAGE.to_string()));
    }
    Ok(amount)
}

/// Check that a date is exactly `YYYY-MM-DD` and names a real day.
///
/// Returns the trimmed date.
pub fn validate_date(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.chars().count() != 10 || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err() {
        return Err(ExpenseError::Validation(DATE_MESSAGE.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Check that a value is exactly `YYYY-MM` and names a real month.
pub fn validate_year_month(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let first_day = format!("{}-01", trimmed);
    if trimmed.chars().count() != 7 || NaiveDate::parse_from_str(&first_day, "%Y-%m-%d").is_err() {
        return Err(ExpenseError::Validation(YEAR_MONTH_MESSAGE.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Trim a category, substituting [`DEFAULT_CATEGORY`] when blank.
pub fn normalize_category(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert_eq!(parse_amount(" -3 ").unwrap(), -3.0);
        assert_eq!(parse_amount("1e2").unwrap(), 100.0);
    }

    #[test]
    fn test_parse_amount_rejects_text() {
        let err = parse_amount("abc").unwrap_err();
        assert!(matches!(err, ExpenseError::Validation(_)));
        assert_eq!(err.to_string(), "Enter valid amount");
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12,50").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("-infinity").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date(" 2024-05-01 ").unwrap(), "2024-05-01");
        let err = validate_date("2024-5-1").unwrap_err();
        assert_eq!(err.to_string(), "Date format YYYY-MM-DD");
        assert!(validate_date("2024-02-30").is_err());
        assert!(validate_date("01/05/2024").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_validate_year_month() {
        assert_eq!(validate_year_month("2024-05").unwrap(), "2024-05");
        assert!(validate_year_month("2024-00").is_err());
        assert!(validate_year_month("2024-5").is_err());
        assert!(validate_year_month("2024-05-01").is_err());
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category(""), "Other");
        assert_eq!(normalize_category("   "), "Other");
        assert_eq!(normalize_category(" Food "), "Food");
    }
}
