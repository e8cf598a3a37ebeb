//! CLI command handlers. Each command is in its own file.

mod list;
mod resolve;
mod show;
mod slug;

pub use list::run_list;
pub use resolve::run_resolve;
pub use show::run_show;
pub use slug::run_slug;
