//! Last-applied color scheme, persisted as JSON.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::Palette;

/// File name of the persisted scheme inside the config directory.
pub const SYNC_STATE_FILE: &str = "color-scheme.json";

/// The most recently applied theme and the palette it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncState {
    /// Name of the theme the palette was extracted from
    pub theme: String,
    /// Palette that was written to the application configs
    pub colors: Palette,
    /// When the palette was applied
    pub applied_at: DateTime<Utc>,
}

impl SyncState {
    /// Creates a state record stamped with the current time.
    #[must_use]
    pub fn new(theme: impl Into<String>, colors: Palette) -> Self {
        Self {
            theme: theme.into(),
            colors,
            applied_at: Utc::now(),
        }
    }

    /// Loads the state file, returning `None` if nothing was applied yet.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read color scheme: {}", path.display()))?;
        let state = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse color scheme: {}", path.display()))?;

        Ok(Some(state))
    }

    /// Writes the state file atomically (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize color scheme")?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

        Ok(())
    }
}
