//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdin and stdout are both terminals
    pub interactive: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols and borders are enabled
    pub unicode: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            interactive: is_tty && std::io::stdin().is_terminal(),
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !ascii_flag,
            mode: OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb),
        }
    }

    /// Plain, colorless context for tests and piped output.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            interactive: false,
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    /// Pretty context without color for tests.
    #[cfg(test)]
    pub fn pretty() -> Self {
        Self {
            interactive: true,
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }
}
