//! Input helper functions for the CLI.
//!
//! Confirmation and path prompts (`input`) plus the default entry date.

mod input;

// Re-export public API
pub use input::{confirm_delete, prompt_export_path, today};
