//! YAML template parsing and structure definitions.
//!
//! Parses project-templates.yaml into strongly-typed Rust structures.

use crate::error::{Error, Result};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete template catalog from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub version: String,
    /// Files rendered for every project regardless of language
    #[serde(default)]
    pub common: BTreeMap<String, String>,
    /// Language-specific templates keyed by `Language::as_str()`
    pub templates: BTreeMap<String, LanguageTemplate>,
}

/// Files contributed by a single language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageTemplate {
    pub description: String,
    /// Path of the entry-point stub, relative to the project root
    pub entry_point: String,
    /// Path (relative to the project root) to content
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl TemplateConfig {
    /// Parse template catalog from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        Ok(config)
    }

    /// Check that every language has a template and that each entry point is
    /// one of the template's files.
    pub fn validate(&self) -> Result<()> {
        for language in Language::all() {
            let template = self
                .get_template(language.as_str())
                .ok_or_else(|| Error::template_not_found(language.as_str()))?;

            if !template.files.contains_key(&template.entry_point) {
                return Err(Error::invalid_catalog(format!(
                    "template '{}' declares entry point '{}' but does not define it",
                    language, template.entry_point
                )));
            }
        }
        Ok(())
    }

    /// Get template by key
    pub fn get_template(&self, name: &str) -> Option<&LanguageTemplate> {
        self.templates.get(name)
    }
}
