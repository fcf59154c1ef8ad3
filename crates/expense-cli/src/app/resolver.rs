//! Path resolution for config and database files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, ExpensesConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path, checking EXPENSES_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Some(path) = config_path_from_env() {
        return Ok(path);
    }
    default_config_path()
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Load the config file if there is one.
///
/// A missing default config is not an error. A config named explicitly
/// through EXPENSES_CONFIG must exist.
pub fn load_config() -> anyhow::Result<Option<ExpensesConfig>> {
    let explicit = config_path_from_env();
    let config_path = match explicit {
        Some(ref path) => path.clone(),
        None => default_config_path()?,
    };

    if !config_path.exists() {
        if explicit.is_some() {
            return Err(missing_config_error(&config_path).into());
        }
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "loading config");
    crate::config::read_config(&config_path).map(Some)
}

/// Resolve the database path: `--db`/EXPENSES_DB, then the config file,
/// then the default data directory.
pub fn resolve_store_path(cli: &Cli, config: Option<&ExpensesConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = db_override(cli) {
        return Ok(path);
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.store.path));
    }
    default_store_path()
}

/// The database path given through `--db` or EXPENSES_DB, if any.
pub fn db_override(cli: &Cli) -> Option<PathBuf> {
    cli.db
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Create the parent directory of a database path if needed.
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
            })?;
        }
    }
    Ok(())
}

/// Error returned when an explicitly named config file is missing.
pub fn missing_config_error(config_path: &Path) -> CliError {
    CliError::not_found(
        format!("No config found at {}", config_path.display()),
        format!(
            "Run:\n  {}={} expenses init\n\nOr unset {} to use the default location.",
            CONFIG_ENV,
            config_path.display(),
            CONFIG_ENV
        ),
    )
}
