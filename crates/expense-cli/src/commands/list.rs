use expense_core::{ExpenseFilter, ExpenseStore};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::output::print_expense_list;
use crate::ui::parse_format;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    let ui_ctx = ctx.ui_context(args.json, format);

    let filter = args
        .filter
        .as_deref()
        .map(ExpenseFilter::parse)
        .unwrap_or_default();
    let store = ctx.open_store()?;
    let expenses = store.list(&filter)?;

    print_expense_list(&ui_ctx, &expenses, ctx.quiet())
}
