use std::path::{Path, PathBuf};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, ExpensesConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, print, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);

    let config_path = match args.config_path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => resolve_config_path()?,
    };
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ))
        .into());
    }

    let store_path = match args.path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => ctx.store_path()?,
    };
    let store_path = absolute(&store_path)?;

    ctx.open_store_at(&store_path)?;
    write_config(&config_path, &ExpensesConfig::new(&store_path))?;
    tracing::info!(
        store = %store_path.display(),
        config = %config_path.display(),
        "initialized expense store"
    );

    if !ctx.quiet() {
        if ui_ctx.mode.is_pretty() {
            print(
                &ui_ctx,
                &badge(&ui_ctx, Badge::Ok, "Initialized expense database"),
            );
            print(&ui_ctx, &kv(&ui_ctx, "Database", &store_path.display().to_string()));
            print(&ui_ctx, &kv(&ui_ctx, "Config", &config_path.display().to_string()));
            print(&ui_ctx, &hint(&ui_ctx, "expenses add 12.50 -c Food -m lunch"));
        } else {
            print(
                &ui_ctx,
                &format!("Initialized expense database at {}", store_path.display()),
            );
        }
    }
    Ok(())
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("Failed to read current directory: {}", e))?;
    Ok(cwd.join(path))
}
