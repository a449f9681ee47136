//! # vextra-core
//!
//! Core library for the Vextra CLI providing:
//! - Process-wide application configuration (name, icons)
//! - The fixed project layout used by `vextra create`

pub mod config;

pub use config::{AppConfig, Icons, ProjectLayout};
