//! CLI argument parsing with clap
//!
//! Only the global flags are parsed by clap. The command name and its
//! arguments are captured verbatim and dispatched by `CommandManager`, since
//! language flags such as `-cpp` are single-dash and multi-character.

use clap::Parser;

/// vextra - Command-line project scaffolding
#[derive(Parser, Debug)]
#[command(name = "vextra")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to run, followed by its arguments (try `vextra help`)
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["vextra"]).unwrap();
        assert!(cli.args.is_empty());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_language_flag_is_captured() {
        let cli = Cli::try_parse_from(["vextra", "create", "MyProject", "-cpp"]).unwrap();
        assert_eq!(cli.args, vec!["create", "MyProject", "-cpp"]);
    }

    #[test]
    fn test_single_letter_language_flag_is_captured() {
        let cli = Cli::try_parse_from(["vextra", "create", "MyProject", "-c"]).unwrap();
        assert_eq!(cli.args, vec!["create", "MyProject", "-c"]);
    }

    #[test]
    fn test_global_flags_before_command() {
        let cli = Cli::try_parse_from(["vextra", "-vv", "help", "create"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.args, vec!["help", "create"]);

        let cli = Cli::try_parse_from(["vextra", "--quiet", "help"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.args, vec!["help"]);
    }
}
