//! Template loading from the embedded catalog.
//!
//! The catalog (`templates/project-templates.yaml`) is compiled into the
//! binary. `from_yaml` exists so tests can supply their own catalog.

use super::parser::{LanguageTemplate, TemplateConfig};
use crate::error::{Error, Result};
use crate::language::Language;
use tracing::debug;

// Path is relative to this source file
const EMBEDDED_YAML: &str = include_str!("../../templates/project-templates.yaml");

/// Validated template catalog
#[derive(Debug)]
pub struct TemplateLoader {
    config: TemplateConfig,
}

impl TemplateLoader {
    /// Load templates from embedded resources
    pub fn from_embedded() -> Result<Self> {
        debug!("Loading embedded project templates");
        Self::from_yaml(EMBEDDED_YAML)
    }

    /// Load templates from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config = TemplateConfig::from_yaml(yaml)?;
        config.validate()?;
        debug!(
            "Loaded template catalog v{} with {} language(s)",
            config.version,
            config.templates.len()
        );
        Ok(Self { config })
    }

    /// Files shared by every project
    pub fn common_files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.config
            .common
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_str()))
    }

    /// Get the template for a language
    pub fn for_language(&self, language: Language) -> Result<&LanguageTemplate> {
        self.config
            .get_template(language.as_str())
            .ok_or_else(|| Error::template_not_found(language.as_str()))
    }
}
