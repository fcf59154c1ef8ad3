use expense_core::{ExpenseStore, YearMonth};

use crate::app::AppContext;
use crate::cli::SummaryArgs;
use crate::output::{print_summary, summary_json};

pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);

    let month = args.month.as_deref().map(YearMonth::parse).transpose()?;
    let store = ctx.open_store()?;
    let totals = store.summarize(month.as_ref())?;

    if ui_ctx.mode.is_json() {
        let value = summary_json(month.as_ref(), &totals);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_summary(&ui_ctx, &totals);
    Ok(())
}
