//! Project template system for Vextra CLI.
//!
//! The template catalog is organized into focused modules:
//! - `parser`: YAML structure parsing into strongly-typed Rust
//! - `loader`: Load and validate the embedded catalog
//! - `renderer`: Render template files with variable substitution
//!
//! # Template Definition Format
//!
//! ```yaml
//! version: "1.0"
//! common:
//!   "README.md": |
//!     # {project}
//! templates:
//!   cpp:
//!     description: "C++ project built with g++"
//!     entry_point: "src/main.cpp"
//!     files:
//!       "src/main.cpp": |
//!         int main(){ std::cout << "Hello from {project}!\n"; }
//! ```
//!
//! Every `Language` must have an entry under `templates`; the loader rejects
//! catalogs that miss one.

pub mod loader;
pub mod parser;
pub mod renderer;

// Re-export main types for convenience
pub use loader::TemplateLoader;
pub use parser::{LanguageTemplate, TemplateConfig};
pub use renderer::{TemplateRenderer, TemplateVars};
