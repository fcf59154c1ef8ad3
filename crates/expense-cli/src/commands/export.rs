use std::path::{Path, PathBuf};

use expense_core::export::{export_csv, write_csv};
use expense_core::{ExpenseFilter, ExpenseStore};

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::errors::CliError;
use crate::helpers::prompt_export_path;
use crate::ui::{badge, print, Badge};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let store = ctx.open_store()?;
    let expenses = store.list(&ExpenseFilter::All)?;

    if expenses.is_empty() {
        if !ctx.quiet() {
            eprintln!("{}", badge(&ui_ctx, Badge::Info, "No rows to export"));
        }
        return Ok(());
    }

    let target = match args.path.clone() {
        Some(path) => path,
        None if ui_ctx.interactive => match prompt_export_path()? {
            Some(path) => path,
            None => {
                if !ctx.quiet() {
                    print(&ui_ctx, "Cancelled");
                }
                return Ok(());
            }
        },
        None => {
            return Err(CliError::invalid_input(
                "No export path given (pass PATH or '-' for stdout)",
            )
            .into())
        }
    };

    if target == "-" {
        write_csv(&expenses, std::io::stdout().lock())?;
        return Ok(());
    }

    let path = PathBuf::from(&target);
    let rows = export_csv(&expenses, &path)?;

    if !ctx.quiet() {
        let message = format!("Saved {} rows to {}", rows, display_name(&path));
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, &message));
        } else {
            print(&ui_ctx, &message);
        }
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
