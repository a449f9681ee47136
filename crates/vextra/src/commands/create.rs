//! `vextra create` command handler

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;
use vextra_core::AppConfig;
use vextra_projects::{Language, Scaffolder};

use super::{Command, CommandManager};
use crate::error::{CommandError, CommandResult};
use crate::output;

const USAGE: &str = "create <ProjectName> [-cpp | -c | -java]";

const DETAILED: &str = "\
Usage:
  vextra create <ProjectName> [-cpp | -c | -java]

Description:
  Creates a new project directory named <ProjectName> in the current
  directory with the standard layout:
    src/ include/ core/ resources/ bin/ doc/ tests/ libs/
  plus README.md, .gitignore, a .<ProjectName>-Info metadata file,
  src/Makefile and an entry point in src/.

  The project name must be a single directory name: not empty, not . or ..,
  and without path separators. Nothing is written if it already exists.

Options:
  -cpp    C++ project: src/main.cpp, Makefile using g++
  -c      C project: src/main.c, Makefile using gcc
  -java   Java project: src/Main.java, Makefile using javac
  (none)  Neutral project: src/main.txt placeholder, empty Makefile

Examples:
  vextra create MyProject
  vextra create MyProject -cpp
  vextra create MyProject -java";

/// Scaffolds a new project directory
#[derive(Debug, Default)]
pub struct CreateCommand {
    base_dir: Utf8PathBuf,
}

impl CreateCommand {
    /// Create projects relative to the current working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create projects inside `base_dir`
    #[cfg(test)]
    pub fn in_dir(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }
}

impl Command for CreateCommand {
    fn name(&self) -> &str {
        "create"
    }

    fn short_description(&self) -> &str {
        "Create a new project structure."
    }

    fn detailed_description(&self) -> &str {
        DETAILED
    }

    fn execute(&self, _manager: &CommandManager, args: &[String]) -> CommandResult {
        let config = AppConfig::global();

        let Some(name) = args.first() else {
            return Err(CommandError::missing_argument(
                "project name",
                config.usage(USAGE),
            ));
        };

        let flag = args.get(1).map(String::as_str);
        let language = Language::resolve(flag);
        if args.len() > 2 {
            debug!("Ignoring extra arguments: {:?}", &args[2..]);
        }

        let scaffolder = Scaffolder::new()?;
        let report = scaffolder.create(self.base_dir(), name, language)?;
        debug!(
            "Scaffolded {} with {} directories and {} files",
            report.root,
            report.directories.len(),
            report.files.len()
        );

        // Only once the project exists
        if let Some(flag) = flag.filter(|f| Language::from_flag(f).is_none()) {
            output::warning(&format!(
                "Unrecognized language flag '{}', using the neutral template.",
                flag
            ));
        }
        output::success(&format!("Project '{}' created successfully!", name));
        if let Some(flag) = language.flag() {
            output::language(flag);
        }

        println!();
        output::info("Next steps:");
        println!("   cd {}", report.root);
        if language.is_compiled() {
            println!("   make -C src");
        }
        Ok(())
    }
}
