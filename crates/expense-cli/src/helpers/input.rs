//! Interactive prompts.

use chrono::Local;
use dialoguer::{Confirm, Input};

use expense_core::Expense;

use crate::ui::format_amount;

/// Today's date in local time as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Ask before removing an expense. Defaults to no.
pub fn confirm_delete(expense: &Expense) -> anyhow::Result<bool> {
    Confirm::new()
        .with_prompt(format!(
            "Delete expense {} ({} {} {})?",
            expense.id,
            expense.date,
            expense.category,
            format_amount(expense.amount)
        ))
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

/// Ask for an export destination. An empty answer means cancel.
pub fn prompt_export_path() -> anyhow::Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt("Save CSV to (empty to cancel)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read path: {}", e))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
