//! Terminal output utilities
//!
//! Success and info lines go to stdout; warnings and errors go to stderr.

use console::style;
use vextra_core::AppConfig;

fn icons() -> &'static vextra_core::Icons {
    &AppConfig::global().icons
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style(icons().success).green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style(icons().error).red().bold(), style(msg).red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style(icons().warning).yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style(icons().info).blue().bold(), msg);
}

/// Print a hint pointing at another command
pub fn hint(msg: &str) {
    println!("{} {}", icons().hint, style(msg).dim());
}

/// Print a usage line
pub fn usage(line: &str) {
    eprintln!("Usage: {}", style(line).bold());
}

/// Print the language chosen for a new project
pub fn language(flag: &str) {
    println!("{} Language: {}", icons().language, style(flag).cyan());
}

/// Print the heading above the command listing
pub fn list_header() {
    println!("{} {}", icons().list, style("Available commands:").bold());
}

/// Print one row of the command listing
pub fn command_row(name: &str, description: &str) {
    let width = AppConfig::global().command_column_width;
    println!(
        "  {} {} — {}",
        icons().bullet,
        style(format!("{:<width$}", name, width = width)).cyan(),
        description
    );
}

/// Print the heading above a command's detailed help
pub fn help_header(name: &str) {
    println!("{} Help for command: {}", icons().help, style(name).bold());
}
