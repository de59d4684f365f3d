//! CLI command handlers.

mod completions;
mod get;

pub use completions::run_completions;
pub use get::{run_get, GetArgs};
