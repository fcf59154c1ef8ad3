//! JSON output formatting for expenses and summaries.

use expense_core::storage::summary_total;
use expense_core::{CategoryTotal, Expense, YearMonth};

/// Convert an expense to JSON for output.
pub fn expense_json(expense: &Expense) -> serde_json::Value {
    serde_json::json!({
        "id": expense.id,
        "date": expense.date,
        "category": expense.category,
        "description": expense.description,
        "amount": expense.amount,
        "created_at": expense.created_at,
    })
}

/// Convert multiple expenses to a JSON array for output.
pub fn expenses_json(expenses: &[Expense]) -> Vec<serde_json::Value> {
    expenses.iter().map(expense_json).collect()
}

/// Convert a category summary to JSON for output.
pub fn summary_json(month: Option<&YearMonth>, totals: &[CategoryTotal]) -> serde_json::Value {
    let categories: serde_json::Map<String, serde_json::Value> = totals
        .iter()
        .map(|t| (t.category.clone(), serde_json::json!(t.total)))
        .collect();
    serde_json::json!({
        "month": month.map(|m| m.as_str()),
        "categories": categories,
        "total": summary_total(totals),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_json_fields() {
        let expense = Expense {
            id: 7,
            date: "2024-05-01".into(),
            category: "Food".into(),
            description: "lunch".into(),
            amount: 12.5,
            created_at: "2024-05-01T12:00:00.000000Z".to_string(),
        };
        let value = expense_json(&expense);
        assert_eq!(value["id"], 7);
        assert_eq!(value["category"], "Food");
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["created_at"], "2024-05-01T12:00:00.000000Z");
    }

    #[test]
    fn test_summary_json_totals() {
        let totals = vec![
            CategoryTotal {
                category: "Food".into(),
                total: 32.5,
            },
            CategoryTotal {
                category: "Rent".into(),
                total: 100.0,
            },
        ];
        let month = YearMonth::parse("2024-05").unwrap();
        let value = summary_json(Some(&month), &totals);
        assert_eq!(value["month"], "2024-05");
        assert_eq!(value["categories"]["Food"], 32.5);
        assert_eq!(value["total"], 132.5);
    }

    #[test]
    fn test_summary_json_all_time_has_null_month() {
        let value = summary_json(None, &[]);
        assert!(value["month"].is_null());
        assert_eq!(value["total"], 0.0);
    }
}
