//! On-disk template directory.
//!
//! Templates live as plain files (one per application profile) so users can
//! edit them. Missing files are seeded from the compiled-in defaults; files
//! that already exist are never overwritten except by an explicit reset.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::template::{AppProfile, Template, TemplateError, APP_PROFILES};

/// Validation state of one template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateStatus {
    /// The file parses; lists the slots it uses
    Valid(Vec<String>),
    /// The file references an unknown placeholder
    Invalid(TemplateError),
    /// The file does not exist
    Missing,
}

/// Access to the template directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Creates a store rooted at `dir` (not created until needed).
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The template directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of an application's template file.
    #[must_use]
    pub fn path_for(&self, app: &AppProfile) -> PathBuf {
        self.dir.join(app.template_file)
    }

    /// Writes the built-in template for every application whose file is
    /// missing. Returns the names of the applications that were seeded.
    pub fn seed_defaults(&self) -> Result<Vec<&'static str>> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create template directory: {}", self.dir.display())
        })?;

        let mut seeded = Vec::new();
        for app in &APP_PROFILES {
            let path = self.path_for(app);
            if path.exists() {
                continue;
            }
            fs::write(&path, app.default_template)
                .with_context(|| format!("Failed to write template: {}", path.display()))?;
            debug!("Seeded default template {}", path.display());
            seeded.push(app.name);
        }

        Ok(seeded)
    }

    /// Reads an application's template text, or `None` if the file is absent.
    pub fn load(&self, app: &AppProfile) -> Result<Option<String>> {
        let path = self.path_for(app);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .with_context(|| format!("Failed to read template: {}", path.display()))
    }

    /// Overwrites an application's template with the built-in default.
    pub fn reset(&self, app: &AppProfile) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create template directory: {}", self.dir.display())
        })?;

        let path = self.path_for(app);
        fs::write(&path, app.default_template)
            .with_context(|| format!("Failed to write template: {}", path.display()))?;
        Ok(path)
    }

    /// Validates an application's template file.
    pub fn check(&self, app: &AppProfile) -> Result<TemplateStatus> {
        let Some(text) = self.load(app)? else {
            return Ok(TemplateStatus::Missing);
        };

        Ok(match Template::parse(app.name, &text) {
            Ok(template) => TemplateStatus::Valid(
                template
                    .slots()
                    .iter()
                    .map(|slot| slot.name().to_string())
                    .collect(),
            ),
            Err(err) => TemplateStatus::Invalid(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::find_app;
    use tempfile::TempDir;

    #[test]
    fn test_seed_defaults_creates_all_templates() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::new(temp_dir.path().join("templates"));

        let seeded = store.seed_defaults().unwrap();
        assert_eq!(seeded.len(), APP_PROFILES.len());

        for app in &APP_PROFILES {
            let text = fs::read_to_string(store.path_for(app)).unwrap();
            assert_eq!(text, app.default_template);
        }
    }

    #[test]
    fn test_seed_defaults_keeps_user_edits() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::new(temp_dir.path());
        let kitty = find_app("kitty").unwrap();
        fs::write(store.path_for(kitty), "background {background}\n").unwrap();

        let seeded = store.seed_defaults().unwrap();

        assert!(!seeded.contains(&"kitty"));
        assert_eq!(seeded.len(), APP_PROFILES.len() - 1);
        assert_eq!(
            store.load(kitty).unwrap().as_deref(),
            Some("background {background}\n")
        );
    }

    #[test]
    fn test_load_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::new(temp_dir.path());
        assert_eq!(store.load(find_app("rofi").unwrap()).unwrap(), None);
    }

    #[test]
    fn test_reset_restores_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::new(temp_dir.path());
        let dunst = find_app("dunst").unwrap();
        fs::write(store.path_for(dunst), "edited").unwrap();

        let path = store.reset(dunst).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), dunst.default_template);
    }

    #[test]
    fn test_check_statuses() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::new(temp_dir.path());
        let kitty = find_app("kitty").unwrap();
        let rofi = find_app("rofi").unwrap();
        fs::write(store.path_for(kitty), "{color4} {background}").unwrap();
        fs::write(store.path_for(rofi), "{accent}").unwrap();

        assert_eq!(
            store.check(kitty).unwrap(),
            TemplateStatus::Valid(vec!["color4".to_string(), "background".to_string()])
        );
        assert!(matches!(
            store.check(rofi).unwrap(),
            TemplateStatus::Invalid(TemplateError::UnknownPlaceholder { .. })
        ));
        assert_eq!(
            store.check(find_app("dunst").unwrap()).unwrap(),
            TemplateStatus::Missing
        );
    }
}
