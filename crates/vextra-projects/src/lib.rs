//! # vextra-projects
//!
//! Project scaffolding library for the Vextra CLI providing:
//! - Language targets selected by command-line flags (`-cpp`, `-c`, `-java`)
//! - An embedded YAML template catalog with `{var}` rendering
//! - Creation of the fixed project layout and its boilerplate files
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use vextra_projects::{Language, Scaffolder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scaffolder = Scaffolder::new()?;
//! let report = scaffolder.create(Utf8Path::new("."), "MyProject", Language::Cpp)?;
//! println!("created {} files under {}", report.files.len(), report.root);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod language;
pub mod scaffold;
pub mod templates;

pub use error::{Error, Result};
pub use language::Language;
pub use scaffold::{ScaffoldReport, Scaffolder};

// Re-export template types for convenience
pub use templates::{TemplateLoader, TemplateRenderer, TemplateVars};
