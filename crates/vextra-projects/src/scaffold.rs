//! Project scaffolding
//!
//! Creates the fixed directory layout from `vextra_core::ProjectLayout` and
//! renders the common and language-specific boilerplate from the template
//! catalog. Nothing is rolled back when a step fails: directories and files
//! written before the failure stay on disk.

use crate::error::{Error, Result};
use crate::language::Language;
use crate::templates::{TemplateLoader, TemplateRenderer, TemplateVars};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::ErrorKind;
use tracing::debug;
use vextra_core::{AppConfig, ProjectLayout};

/// What a successful `Scaffolder::create` produced
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub root: Utf8PathBuf,
    pub directories: Vec<Utf8PathBuf>,
    pub files: Vec<Utf8PathBuf>,
    pub entry_point: Utf8PathBuf,
}

/// Creates new projects from the template catalog
#[derive(Debug)]
pub struct Scaffolder {
    loader: TemplateLoader,
    renderer: TemplateRenderer,
    layout: ProjectLayout,
}

impl Scaffolder {
    /// Scaffolder backed by the embedded catalog and the global layout
    pub fn new() -> Result<Self> {
        Ok(Self::with_loader(TemplateLoader::from_embedded()?))
    }

    /// Scaffolder backed by a custom catalog
    pub fn with_loader(loader: TemplateLoader) -> Self {
        Self {
            loader,
            renderer: TemplateRenderer::new(),
            layout: AppConfig::global().layout.clone(),
        }
    }

    /// Create project `name` inside `base`.
    ///
    /// Fails with `Error::ProjectExists` before touching the filesystem if
    /// anything named `name` is already present in `base`.
    pub fn create(
        &self,
        base: &Utf8Path,
        name: &str,
        language: Language,
    ) -> Result<ScaffoldReport> {
        validate_project_name(name)?;

        let root = base.join(name);
        ensure_absent(&root)?;

        let template = self.loader.for_language(language)?;

        // Non-recursive so a concurrent creator of the same root loses cleanly
        std::fs::create_dir(&root).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => Error::project_exists(root.as_str()),
            _ => Error::create_dir(root.as_str(), e),
        })?;
        debug!("Created project root {}", root);

        let directories = self.create_layout(&root)?;

        let label = match language {
            Language::Neutral => AppConfig::global().default_language,
            other => other.as_str(),
        };
        let vars = TemplateVars::new(name).with_language(label);

        let mut files = Vec::new();
        for (path, content) in self.loader.common_files() {
            files.push(self.renderer.render_file(&root, path, content, &vars)?);
        }
        for (path, content) in &template.files {
            files.push(self.renderer.render_file(&root, path, content, &vars)?);
        }
        debug!("Wrote {} file(s) for {} template", files.len(), language);

        let entry_point = root.join(self.renderer.render_string(&template.entry_point, &vars));

        Ok(ScaffoldReport {
            root,
            directories,
            files,
            entry_point,
        })
    }

    fn create_layout(&self, root: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
        let mut created = Vec::new();
        for dir in self.layout.directories() {
            let path = root.join(dir);
            std::fs::create_dir_all(&path).map_err(|e| Error::create_dir(path.as_str(), e))?;
            debug!("Created directory {}", path);
            created.push(path);
        }
        Ok(created)
    }
}

/// Check that `name` names exactly one directory entry
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_project_name(name, "Name cannot be empty"));
    }
    if name == "." || name == ".." {
        return Err(Error::invalid_project_name(
            name,
            "Name cannot refer to the current or parent directory",
        ));
    }
    if name.contains(['/', '\\']) {
        return Err(Error::invalid_project_name(
            name,
            "Name cannot contain path separators",
        ));
    }
    Ok(())
}

// Any entry counts, including files and dangling symlinks
fn ensure_absent(root: &Utf8Path) -> Result<()> {
    match std::fs::symlink_metadata(root) {
        Ok(_) => Err(Error::project_exists(root.as_str())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Io(e)),
    }
}
