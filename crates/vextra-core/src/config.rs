//! Process-wide application configuration
//!
//! Everything here is fixed at build time. `AppConfig::global()` hands out a
//! shared, immutable instance that is built on first access.

use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Icons prefixed to terminal messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub hint: &'static str,
    pub list: &'static str,
    pub bullet: &'static str,
    pub help: &'static str,
    pub language: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            success: "✅",
            error: "❌",
            warning: "⚠️",
            info: "ℹ️",
            hint: "💡",
            list: "📚",
            bullet: "🔹",
            help: "🧩",
            language: "🧠",
        }
    }
}

/// Directory names created under every new project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub src: &'static str,
    pub include: &'static str,
    pub core: &'static str,
    pub resources: &'static str,
    pub bin: &'static str,
    pub doc: &'static str,
    pub tests: &'static str,
    pub libs: &'static str,
}

impl ProjectLayout {
    /// All directories, in creation order
    pub fn directories(&self) -> [&'static str; 8] {
        [
            self.src,
            self.include,
            self.core,
            self.resources,
            self.bin,
            self.doc,
            self.tests,
            self.libs,
        ]
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            src: "src",
            include: "include",
            core: "core",
            resources: "resources",
            bin: "bin",
            doc: "doc",
            tests: "tests",
            libs: "libs",
        }
    }
}

/// Static configuration shared by every crate in the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Binary name as typed by users, used in usage lines and hints
    pub app_name: &'static str,
    /// Label shown for projects created without a language flag
    pub default_language: &'static str,
    /// Width of the command-name column in listings
    pub command_column_width: usize,
    pub icons: Icons,
    pub layout: ProjectLayout,
}

impl AppConfig {
    /// Get the process-wide configuration
    pub fn global() -> &'static AppConfig {
        CONFIG.get_or_init(AppConfig::default)
    }

    /// Format a usage line such as `vextra help <command>`
    pub fn usage(&self, rest: &str) -> String {
        if rest.is_empty() {
            self.app_name.to_string()
        } else {
            format!("{} {}", self.app_name, rest)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "vextra",
            default_language: "none",
            command_column_width: 10,
            icons: Icons::default(),
            layout: ProjectLayout::default(),
        }
    }
}
