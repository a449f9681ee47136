//! Command registry and dispatcher

use std::collections::BTreeMap;

use tracing::debug;

use super::Command;
use crate::error::{CommandError, CommandResult};
use crate::output;

/// Owns every registered command, keyed by name
#[derive(Default)]
pub struct CommandManager {
    // Sorted so listings are deterministic
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandManager {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its name. A later registration with the same
    /// name replaces the earlier one.
    pub fn register(&mut self, command: Box<dyn Command>) {
        let name = command.name().to_string();
        if self.commands.insert(name.clone(), command).is_some() {
            debug!("Replaced existing command: {}", name);
        } else {
            debug!("Registered command: {}", name);
        }
    }

    /// Dispatch `args[0]` with the remaining arguments.
    ///
    /// Failures are reported here, once, and then handed back so the caller
    /// can pick an exit code.
    pub fn execute(&self, args: &[String]) -> CommandResult {
        let result = self.dispatch(args);
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    fn dispatch(&self, args: &[String]) -> CommandResult {
        let Some((name, rest)) = args.split_first() else {
            return Err(CommandError::NoCommand);
        };

        let command = self
            .find(name)
            .ok_or_else(|| CommandError::unknown_command(name.as_str()))?;

        debug!("Dispatching '{}' with {} argument(s)", name, rest.len());
        command.execute(self, rest)
    }

    fn report(&self, err: &CommandError) {
        if err.is_warning() {
            output::warning(&err.to_string());
        } else {
            output::error(&err.to_string());
        }

        match err {
            CommandError::NoCommand => self.list(),
            CommandError::MissingArgument { usage, .. } => output::usage(usage),
            _ => {
                if let Some(hint) = err.hint() {
                    output::hint(&hint);
                }
            }
        }
    }

    /// Print every command with its short description, sorted by name
    pub fn list(&self) {
        if self.is_empty() {
            debug!("No commands registered");
        }
        output::list_header();
        for command in self.commands() {
            output::command_row(command.name(), command.short_description());
        }
    }

    /// Look up a command by name
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| &**command)
    }

    /// Registered commands in name order
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|command| &**command)
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
