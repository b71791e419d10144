//! CLI commands - Strategy pattern.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait; `main` only parses arguments and dispatches.

mod create;
mod payload;

pub use create::CreateCommand;
pub use payload::PayloadCommand;

use anyhow::Result;

/// Trait for command execution.
///
/// Each command struct holds its parsed arguments and implements this
/// trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}
