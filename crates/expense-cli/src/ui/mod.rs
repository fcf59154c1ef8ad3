//! UI primitives for the Expenses CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and text styles
//! - **Render**: Tables, badges, key-value lines, hints, errors
//! - **Format**: String utilities (truncate, amounts)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::parse_format;
pub use theme::Badge;

pub use render::{badge, hint, kv, print, print_error, table, Column};

pub use format::{format_amount, single_line, truncate};
