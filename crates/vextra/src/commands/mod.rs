//! Command registry and built-in commands
//!
//! Commands implement [`Command`] and are registered into a
//! [`CommandManager`]. Adding a command means writing a new implementor and
//! registering it in [`default_manager`]; dispatch itself never changes.

mod create;
mod help;
mod manager;

pub use create::CreateCommand;
pub use help::HelpCommand;
pub use manager::CommandManager;

use tracing::debug;

use crate::error::CommandResult;

/// A named operation the CLI can perform
pub trait Command {
    /// Name typed on the command line
    fn name(&self) -> &str;

    /// One-line summary shown in listings
    fn short_description(&self) -> &str;

    /// Multi-line usage, flags and examples shown by `help <name>`
    fn detailed_description(&self) -> &str;

    /// Run with the arguments that follow the command name.
    ///
    /// `manager` is the registry this command was dispatched from.
    fn execute(&self, manager: &CommandManager, args: &[String]) -> CommandResult;
}

/// Manager with every built-in command registered
pub fn default_manager() -> CommandManager {
    let mut manager = CommandManager::new();
    manager.register(Box::new(CreateCommand::new()));
    manager.register(Box::new(HelpCommand));
    debug!("{} command(s) available", manager.len());
    manager
}
