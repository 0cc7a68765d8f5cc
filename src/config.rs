//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the sync settings
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::template::APP_PROFILES;

/// Color synchronization switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Master switch for color synchronization
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Apply automatically when the GTK theme changes
    #[serde(default)]
    pub auto_apply: bool,
    /// Per-application switches; applications not listed are enabled
    #[serde(default)]
    pub applications: BTreeMap<String, bool>,
}

fn default_true() -> bool {
    true
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_apply: false,
            applications: BTreeMap::new(),
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Theme search directories; empty means the platform defaults
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub theme_dirs: Vec<PathBuf>,
    /// Template directory; `None` means `<config dir>/templates`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - `$PALETTE_SYNC_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/PaletteSync/config.toml`
/// - macOS: `~/Library/Application Support/PaletteSync/config.toml`
/// - Windows: `%APPDATA%\PaletteSync\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Synchronization switches
    #[serde(default)]
    pub sync: SyncConfig,
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Honors `PALETTE_SYNC_CONFIG_DIR`, otherwise the platform config
    /// directory joined with `PaletteSync`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path (temp file + rename).
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - application switches only name known applications
    /// - `template_dir`, if set, is not an existing regular file
    pub fn validate(&self) -> Result<()> {
        for name in self.sync.applications.keys() {
            if !APP_PROFILES.iter().any(|app| app.name == name.as_str()) {
                anyhow::bail!(
                    "Unknown application '{}' in [sync.applications]. Known: {}",
                    name,
                    crate::template::app_names().join(", ")
                );
            }
        }

        if let Some(dir) = &self.paths.template_dir {
            if dir.is_file() {
                anyhow::bail!("Template directory is a file: {}", dir.display());
            }
        }

        Ok(())
    }

    /// Whether templates for `app` should be written.
    #[must_use]
    pub fn is_app_enabled(&self, app: &str) -> bool {
        self.sync.applications.get(app).copied().unwrap_or(true)
    }

    /// Sets the switch for one application.
    pub fn set_app_enabled(&mut self, app: &str, enabled: bool) -> Result<()> {
        if crate::template::find_app(app).is_none() {
            anyhow::bail!(
                "Unknown application '{}'. Known: {}",
                app,
                crate::template::app_names().join(", ")
            );
        }
        self.sync.applications.insert(app.to_string(), enabled);
        Ok(())
    }

    /// Enable flags for every known application.
    #[must_use]
    pub fn enabled_apps(&self) -> HashMap<String, bool> {
        APP_PROFILES
            .iter()
            .map(|app| (app.name.to_string(), self.is_app_enabled(app.name)))
            .collect()
    }

    /// Template directory, defaulting to `<config dir>/templates`.
    #[must_use]
    pub fn template_dir(&self, config_dir: &Path) -> PathBuf {
        self.paths
            .template_dir
            .clone()
            .unwrap_or_else(|| config_dir.join("templates"))
    }

    /// Theme search directories, defaulting to the standard locations.
    #[must_use]
    pub fn theme_dirs(&self, home: &Path) -> Vec<PathBuf> {
        if self.paths.theme_dirs.is_empty() {
            crate::services::themes::default_theme_dirs(home)
        } else {
            self.paths.theme_dirs.clone()
        }
    }
}
