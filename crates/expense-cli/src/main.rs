//! Expenses CLI - record, browse, summarize and export personal expenses
//!
//! This is the command-line interface for the expense tracker. It parses
//! arguments, opens the store and hands off to one handler per command.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};

use app::AppContext;
use cli::{Cli, Commands};
use errors::{exit_code_for, CliError};
use ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "command failed");
        let ui_ctx = UiContext::from_env(false, None, cli.no_color, cli.ascii);
        match err.downcast_ref::<CliError>() {
            Some(CliError::NotFound { message, hint }) => {
                print_error(&ui_ctx, message, Some(hint))
            }
            _ => print_error(&ui_ctx, &format!("{:#}", err), None),
        }
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Some(Commands::Init(args)) => commands::handle_init(&ctx, args),
        Some(Commands::Add(args)) => commands::handle_add(&ctx, args),
        Some(Commands::List(args)) => commands::handle_list(&ctx, args),
        Some(Commands::Delete(args)) => commands::handle_delete(&ctx, args),
        Some(Commands::Summary(args)) => commands::handle_summary(&ctx, args),
        Some(Commands::Export(args)) => commands::handle_export(&ctx, args),
        Some(Commands::Completions { shell }) => commands::handle_completions(*shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
