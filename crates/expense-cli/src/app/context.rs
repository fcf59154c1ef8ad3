//! Application context for the Expenses CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;

use expense_core::{ExpenseStore, SqliteStore};

use crate::cli::Cli;
use crate::config::ExpensesConfig;
use crate::ui::UiContext;

use super::resolver::{db_override, ensure_parent_dir, load_config, resolve_store_path};

/// Application context that bundles CLI args with the config file.
///
/// Handlers receive this instead of re-reading config or threading the
/// global flags through every call.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<ExpensesConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them on first use.
    pub fn config(&self) -> anyhow::Result<Option<&ExpensesConfig>> {
        Ok(self.config.get_or_try_init(load_config)?.as_ref())
    }

    /// Resolve the database path for this invocation.
    ///
    /// An explicit `--db` never reads the config file.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = db_override(self.cli) {
            return Ok(path);
        }
        resolve_store_path(self.cli, self.config()?)
    }

    /// Open (or create) the expense database.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let path = self.store_path()?;
        self.open_store_at(&path)
    }

    /// Open (or create) the expense database at an explicit path.
    pub fn open_store_at(&self, path: &Path) -> anyhow::Result<SqliteStore> {
        ensure_parent_dir(path)?;
        tracing::debug!(path = %path.display(), "opening expense store");
        Ok(SqliteStore::open(path)?)
    }

    /// Build the UI context for a command.
    ///
    /// A `[ui] color = false` in the config behaves like `--no-color`.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        let config_no_color = self
            .config()
            .ok()
            .flatten()
            .and_then(|config| config.ui.color)
            .map(|color| !color)
            .unwrap_or(false);
        UiContext::from_env(
            json,
            format,
            self.cli.no_color || config_no_color,
            self.cli.ascii,
        )
    }
}
