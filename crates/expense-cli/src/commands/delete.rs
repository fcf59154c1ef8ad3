use expense_core::ExpenseStore;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::confirm_delete;
use crate::output::expense_rows;
use crate::ui::{badge, print, Badge};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let mut store = ctx.open_store()?;

    let Some(expense) = store.get(args.id)? else {
        eprintln!(
            "{}",
            badge(
                &ui_ctx,
                Badge::Warn,
                &format!("No expense with ID {}", args.id)
            )
        );
        return Ok(());
    };

    if ui_ctx.interactive && !args.yes {
        if !ctx.quiet() {
            for row in expense_rows(std::slice::from_ref(&expense), true) {
                print(&ui_ctx, &row.join(" | "));
            }
        }
        if !confirm_delete(&expense)? {
            if !ctx.quiet() {
                print(&ui_ctx, "Cancelled");
            }
            return Ok(());
        }
    }

    store.delete(expense.id)?;

    if !ctx.quiet() {
        let message = format!("Deleted expense {}", expense.id);
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, &message));
        } else {
            print(&ui_ctx, &message);
        }
    }
    Ok(())
}
