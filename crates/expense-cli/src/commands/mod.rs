//! Command handlers, one module per subcommand.

mod add;
mod delete;
mod export;
mod init;
mod list;
mod misc;
mod summary;

pub use add::handle_add;
pub use delete::handle_delete;
pub use export::handle_export;
pub use init::handle_init;
pub use list::handle_list;
pub use misc::handle_completions;
pub use summary::handle_summary;
