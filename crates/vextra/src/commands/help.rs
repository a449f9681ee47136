//! `vextra help` command handler

use super::{Command, CommandManager};
use crate::error::{CommandError, CommandResult};
use crate::output;
use vextra_core::AppConfig;

const DETAILED: &str = "\
Usage:
  vextra help [command]

Description:
  Without arguments, lists all available commands.
  With a command name, displays detailed usage and examples for that command.

Examples:
  vextra help
  vextra help create";

/// Lists commands, or shows the detailed help of one
#[derive(Debug, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn short_description(&self) -> &str {
        "Show usage information about available commands."
    }

    fn detailed_description(&self) -> &str {
        DETAILED
    }

    fn execute(&self, manager: &CommandManager, args: &[String]) -> CommandResult {
        let Some(target) = args.first() else {
            manager.list();
            println!();
            output::hint(&format!(
                "Use '{}' for detailed information.",
                AppConfig::global().usage("help <command>")
            ));
            return Ok(());
        };

        let command = manager
            .find(target)
            .ok_or_else(|| CommandError::unknown_command(target.as_str()))?;

        output::help_header(command.name());
        println!("{}", command.detailed_description());
        Ok(())
    }
}
