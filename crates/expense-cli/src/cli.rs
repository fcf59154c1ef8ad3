use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use expense_core::VERSION;

/// Expenses - record, browse, summarize and export personal expenses
#[derive(Parser)]
#[command(name = "expenses")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the expense database
    #[arg(short, long, global = true, env = "EXPENSES_DB")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols and borders only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the database will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Amount (decimal, may be negative)
    #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: String,

    /// Category (defaults to "Other")
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Free-text description
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,

    /// Date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Filter: YYYY-MM for a month, any other text to search
    #[arg(value_name = "FILTER")]
    pub filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Expense ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Month as YYYY-MM (all time when omitted)
    #[arg(value_name = "MONTH")]
    pub month: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination CSV file ("-" for stdout); prompted for when omitted
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the expense database and write a config pointing at it
    Init(InitArgs),

    /// Record a new expense
    Add(AddArgs),

    /// List expenses, newest date first
    List(ListArgs),

    /// Delete an expense by ID
    Delete(DeleteArgs),

    /// Show per-category totals
    Summary(SummaryArgs),

    /// Export all expenses to CSV
    Export(ExportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
