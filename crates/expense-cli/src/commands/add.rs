use expense_core::{ExpenseStore, NewExpense};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::today;
use crate::output::expense_json;
use crate::ui::{badge, print, Badge};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);

    let date = args.date.clone().unwrap_or_else(today);
    // Validate before opening so a rejected entry never touches the store.
    let new_expense =
        NewExpense::from_input(&date, &args.category, &args.description, &args.amount)?;

    let mut store = ctx.open_store()?;
    let id = store.add(&new_expense)?;

    if ui_ctx.mode.is_json() {
        let expense = store
            .get(id)?
            .ok_or_else(|| anyhow::anyhow!("Expense {} vanished after insert", id))?;
        println!("{}", serde_json::to_string_pretty(&expense_json(&expense))?);
        return Ok(());
    }

    if !ctx.quiet() {
        let message = format!("Added expense {}", id);
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, &message));
        } else {
            print(&ui_ctx, &message);
        }
    }
    Ok(())
}
