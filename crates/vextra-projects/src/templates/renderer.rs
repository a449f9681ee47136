//! Template rendering with `{var}` substitution.
//!
//! Handles:
//! - Variable substitution ({project}, {app}, {language}, {date}, {year})
//! - Writing rendered files below a project root

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Local;
use tracing::trace;

/// Template variables for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    pub project: String,
    pub app: String,
    pub language: String,
    pub date: String,
    pub year: String,
}

impl TemplateVars {
    /// Create template variables with defaults
    pub fn new(project: impl Into<String>) -> Self {
        let now = Local::now();
        let config = vextra_core::AppConfig::global();
        Self {
            project: project.into(),
            app: config.app_name.to_string(),
            language: config.default_language.to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            year: now.format("%Y").to_string(),
        }
    }

    /// Set language label
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Placeholder at the start of `text`, with its length and value
    fn lookup(&self, text: &str) -> Option<(usize, &str)> {
        self.pairs()
            .into_iter()
            .find(|(placeholder, _)| text.starts_with(placeholder))
            .map(|(placeholder, value)| (placeholder.len(), value))
    }

    fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("{project}", self.project.as_str()),
            ("{app}", self.app.as_str()),
            ("{language}", self.language.as_str()),
            ("{date}", self.date.as_str()),
            ("{year}", self.year.as_str()),
        ]
    }
}

/// Template renderer
#[derive(Debug, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render a string template with variables.
    ///
    /// Every occurrence of each known `{var}` is replaced in a single pass, so
    /// substituted values are never scanned again. Any other braces (C blocks,
    /// Java classes) pass through untouched.
    pub fn render_string(&self, template: &str, vars: &TemplateVars) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match vars.lookup(tail) {
                Some((len, value)) => {
                    out.push_str(value);
                    rest = &tail[len..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Render one file below `root` and write it, creating parent directories
    /// as needed.
    pub fn render_file(
        &self,
        root: &Utf8Path,
        path_template: &str,
        content_template: &str,
        vars: &TemplateVars,
    ) -> Result<Utf8PathBuf> {
        let relative = self.render_string(path_template, vars);
        let full_path = root.join(&relative);
        let content = self.render_string(content_template, vars);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::create_dir(parent.as_str(), e))?;
        }

        trace!("Writing {} ({} bytes)", full_path, content.len());
        std::fs::write(&full_path, content)
            .map_err(|e| Error::write_file(full_path.as_str(), e))?;

        Ok(full_path)
    }
}
