//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success (including no-op outcomes such as an empty export)
/// - 1: General error, storage faults included
/// - 2: Misuse of shell command (reserved by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (config, database).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "EXPENSES_CONFIG";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "EXPENSES_LOG";

/// Width of the description column in table output.
pub const DESCRIPTION_MAX: usize = 48;
