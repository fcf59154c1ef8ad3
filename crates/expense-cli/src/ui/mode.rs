//! Output mode routing logic.

use crate::errors::CliError;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for scripts
    #[default]
    Plain,
    /// Human-friendly tables and colors (TTY only)
    Pretty,
}

/// Values accepted by `--format`.
pub const FORMATS: [&str; 2] = ["table", "plain"];

/// Validate a `--format` value.
pub fn parse_format(value: Option<&str>) -> anyhow::Result<Option<&str>> {
    match value {
        None => Ok(None),
        Some(v) if FORMATS.contains(&v) => Ok(Some(v)),
        Some(v) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use {})",
            v,
            FORMATS.join(" or ")
        ))
        .into()),
    }
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins outright. `--format plain` and `TERM=dumb` force plain.
    /// Otherwise a TTY gets pretty output and anything else plain.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format_flag == Some("plain") || term_is_dumb {
            return Self::Plain;
        }
        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
