//! Errors returned by commands
//!
//! Every variant is reported once by `CommandManager::execute`; `main` only
//! turns the outcome into an exit code.

use thiserror::Error;
use vextra_core::AppConfig;

/// Result type alias for command execution
pub type CommandResult = std::result::Result<(), CommandError>;

/// Command-level failures
#[derive(Error, Debug)]
pub enum CommandError {
    /// Nothing to dispatch
    #[error("No command provided.")]
    NoCommand,

    /// No command registered under this name
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// A required positional argument is absent
    #[error("Missing {what}.")]
    MissingArgument { what: String, usage: String },

    /// Target directory is already there; nothing was written
    #[error("Directory '{path}' already exists.")]
    ProjectExists { path: String },

    /// Project name rejected before touching the filesystem
    #[error("{0}")]
    InvalidProjectName(String),

    /// Scaffolding started and failed part way
    #[error("Failed to create project: {reason}")]
    CreateFailed { reason: String },
}

impl CommandError {
    /// Create an unknown command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create a missing argument error
    pub fn missing_argument(what: impl Into<String>, usage: impl Into<String>) -> Self {
        Self::MissingArgument {
            what: what.into(),
            usage: usage.into(),
        }
    }

    /// Precondition failures are reported as warnings, not errors
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::ProjectExists { .. })
    }

    /// Suggestion printed after the message, if any
    pub fn hint(&self) -> Option<String> {
        let config = AppConfig::global();
        match self {
            Self::UnknownCommand { .. } => Some(format!(
                "Try `{}` for a list of commands.",
                config.usage("help")
            )),
            Self::InvalidProjectName(_) => Some(format!(
                "Run `{}` for naming rules.",
                config.usage("help create")
            )),
            _ => None,
        }
    }
}

impl From<vextra_projects::Error> for CommandError {
    fn from(err: vextra_projects::Error) -> Self {
        match err {
            vextra_projects::Error::ProjectExists { path } => Self::ProjectExists { path },
            err @ vextra_projects::Error::InvalidProjectName { .. } => {
                Self::InvalidProjectName(err.to_string())
            }
            err => Self::CreateFailed {
                reason: err.to_string(),
            },
        }
    }
}
