//! Text and table output formatting for expenses and summaries.

use expense_core::storage::summary_total;
use expense_core::{CategoryTotal, Expense};

use crate::constants::DESCRIPTION_MAX;
use crate::output::json::expenses_json;
use crate::ui::theme::{styled, styles};
use crate::ui::{format_amount, print, single_line, table, truncate, Column, UiContext};

const EXPENSE_COLUMNS: [Column; 5] = [
    Column::numeric("ID"),
    Column::new("Date"),
    Column::new("Category"),
    Column::new("Description"),
    Column::numeric("Amount"),
];

/// Build display rows for an expense list.
pub fn expense_rows(expenses: &[Expense], pretty: bool) -> Vec<Vec<String>> {
    expenses
        .iter()
        .map(|expense| {
            let description = single_line(&expense.description);
            let description = if pretty {
                truncate(&description, DESCRIPTION_MAX)
            } else {
                description
            };
            vec![
                expense.id.to_string(),
                expense.date.clone(),
                expense.category.clone(),
                description,
                format_amount(expense.amount),
            ]
        })
        .collect()
}

/// Print a list of expenses as JSON, a table, or plain rows.
pub fn print_expense_list(ctx: &UiContext, expenses: &[Expense], quiet: bool) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&expenses_json(expenses))?);
        return Ok(());
    }

    if expenses.is_empty() {
        if !quiet && ctx.mode.is_pretty() {
            print(ctx, &styled("No expenses", styles::dim(), ctx.color));
        }
        return Ok(());
    }

    let rows = expense_rows(expenses, ctx.mode.is_pretty());
    print(ctx, &table(ctx, &EXPENSE_COLUMNS, &rows));
    Ok(())
}

/// Build summary lines: one `category: total` per category, then the total.
pub fn summary_lines(ctx: &UiContext, totals: &[CategoryTotal]) -> Vec<String> {
    if totals.is_empty() {
        return vec!["No data".to_string()];
    }

    let mut lines: Vec<String> = totals
        .iter()
        .map(|t| {
            let amount = format_amount(t.total);
            let amount = if t.total < 0.0 {
                styled(&amount, styles::credit(), ctx.color)
            } else {
                amount
            };
            format!("{}: {}", t.category, amount)
        })
        .collect();
    let total = format_amount(summary_total(totals));
    lines.push(format!(
        "{} {}",
        styled("Total:", styles::bold(), ctx.color),
        total
    ));
    lines
}

/// Print a category summary.
pub fn print_summary(ctx: &UiContext, totals: &[CategoryTotal]) {
    for line in summary_lines(ctx, totals) {
        print(ctx, &line);
    }
}
