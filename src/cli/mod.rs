//! Command line interface for keygen_publish.
//!
//! Parses arguments, resolves configuration and runs the publish workflow
//! with user feedback on the terminal.

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use commands::execute_command;
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args).await
}
