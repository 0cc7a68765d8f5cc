//! Theme → palette → application config synchronization.
//!
//! [`ColorSync`] runs one apply cycle:
//!
//! 1. locate the theme's `gtk-3.0/gtk.css` and read it
//! 2. parse, resolve and build the palette ([`extract_palette`])
//! 3. persist the last-applied [`SyncState`]
//! 4. seed missing templates, fill every enabled one and write it to the
//!    application's destination
//!
//! Steps 1–3 abort the cycle on failure. Step 4 is isolated per
//! destination: a broken template or an unwritable path is logged and
//! reported, and the remaining destinations are still written.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::Context;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::sync_state::SYNC_STATE_FILE;
use crate::models::{Palette, SyncState};
use crate::parser::{parse_stylesheet, resolve_references, RawColorTable};
use crate::services::palette_builder::{build_palette_with_report, BuildOutcome};
use crate::services::templates::TemplateStore;
use crate::services::themes::{read_stylesheet, ThemeLocator, STYLESHEET_FILE};
use crate::template::{fill_enabled, fill_template, AppProfile, TemplateError, APP_PROFILES};

/// Failures at the sync boundary.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No search directory contains the theme.
    #[error("theme not found: {0}")]
    ThemeNotFound(String),
    /// The theme exists but has no stylesheet.
    #[error("stylesheet not found: {}", .0.display())]
    StylesheetNotFound(PathBuf),
    /// Color synchronization is switched off.
    #[error("color sync is disabled")]
    Disabled,
    /// Theme-change hook fired while auto-apply is off.
    #[error("auto-apply is disabled")]
    AutoApplyDisabled,
    /// Another apply for the same theme has not finished yet.
    #[error("an apply for theme '{0}' is already in progress")]
    ApplyInProgress(String),
    /// Writing a generated config failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// A template references an unknown placeholder.
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// Any other I/O or configuration failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Everything learned from one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Declarations as written in the stylesheet
    pub raw: RawColorTable,
    /// Declarations after reference resolution
    pub resolved: RawColorTable,
    /// The resulting palette and the theme keys that fed it
    pub outcome: BuildOutcome,
}

impl Extraction {
    /// The extracted palette.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.outcome.palette
    }
}

/// Runs the pure pipeline: parse → resolve → build.
pub fn extract_palette(stylesheet: &str) -> Extraction {
    let raw = parse_stylesheet(stylesheet);
    let resolved = resolve_references(&raw);
    let outcome = build_palette_with_report(&resolved);

    Extraction {
        raw,
        resolved,
        outcome,
    }
}

/// What happened to one application's destination during an apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationStatus {
    /// The filled template was written
    Written,
    /// The application is switched off
    Disabled,
    /// The application's template file does not exist
    TemplateMissing,
    /// The template could not be read
    ReadFailed(String),
    /// The template uses an unknown placeholder
    InvalidTemplate(TemplateError),
    /// The destination could not be written
    WriteFailed(String),
}

impl DestinationStatus {
    /// Short label for reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::Disabled => "disabled",
            Self::TemplateMissing => "template-missing",
            Self::ReadFailed(_) => "read-failed",
            Self::InvalidTemplate(_) => "invalid-template",
            Self::WriteFailed(_) => "write-failed",
        }
    }

    /// True for statuses that indicate something went wrong.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::ReadFailed(_) | Self::InvalidTemplate(_) | Self::WriteFailed(_)
        )
    }
}

/// Outcome for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationReport {
    /// Application name
    pub app: &'static str,
    /// Destination path
    pub path: PathBuf,
    /// What happened
    pub status: DestinationStatus,
}

/// Result of a completed apply cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// Theme name (or stylesheet label) the palette came from
    pub theme: String,
    /// Number of declarations found in the stylesheet
    pub color_count: usize,
    /// Theme keys that contributed to the palette
    pub matched: Vec<&'static str>,
    /// The applied palette
    pub palette: Palette,
    /// One entry per known application, in profile order
    pub destinations: Vec<DestinationReport>,
}

impl ApplyReport {
    /// Number of destinations written.
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.destinations
            .iter()
            .filter(|d| d.status == DestinationStatus::Written)
            .count()
    }

    /// Number of destinations that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.destinations
            .iter()
            .filter(|d| d.status.is_failure())
            .count()
    }
}

/// Releases a theme's single-flight slot when dropped.
struct FlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<String>>,
    theme: String,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.theme);
    }
}

/// Coordinates theme discovery, palette extraction, persistence and
/// template output.
#[derive(Debug)]
pub struct ColorSync {
    config: Config,
    config_dir: PathBuf,
    home: PathBuf,
    locator: ThemeLocator,
    templates: TemplateStore,
    in_flight: Mutex<HashSet<String>>,
}

impl ColorSync {
    /// Creates a sync manager with explicit directories.
    #[must_use]
    pub fn new(config: Config, config_dir: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let home = home.into();
        let locator = ThemeLocator::new(config.theme_dirs(&home));
        let templates = TemplateStore::new(config.template_dir(&config_dir));

        Self {
            config,
            config_dir,
            home,
            locator,
            templates,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Creates a sync manager from the user's config file and home directory.
    pub fn from_environment() -> anyhow::Result<Self> {
        let config = Config::load()?;
        let config_dir = Config::config_dir()?;
        let home = dirs::home_dir().context("Failed to determine home directory")?;
        Ok(Self::new(config, config_dir, home))
    }

    /// Current settings.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Theme locator in use.
    #[must_use]
    pub fn locator(&self) -> &ThemeLocator {
        &self.locator
    }

    /// Template store in use.
    #[must_use]
    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// Path of the persisted last-applied state.
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.config_dir.join(SYNC_STATE_FILE)
    }

    /// Destination of an application's generated config.
    #[must_use]
    pub fn destination(&self, app: &AppProfile) -> PathBuf {
        app.destination_in(&self.home)
    }

    /// The last applied scheme, if any.
    pub fn last_applied(&self) -> anyhow::Result<Option<SyncState>> {
        SyncState::load(&self.state_path())
    }

    /// Path of a theme's stylesheet.
    pub fn stylesheet_for(&self, theme_name: &str) -> Result<PathBuf, SyncError> {
        let theme_dir = self
            .locator
            .find_theme(theme_name)
            .ok_or_else(|| SyncError::ThemeNotFound(theme_name.to_string()))?;

        let stylesheet = theme_dir.join(STYLESHEET_FILE);
        if !stylesheet.is_file() {
            return Err(SyncError::StylesheetNotFound(stylesheet));
        }
        Ok(stylesheet)
    }

    /// Extracts a palette from an installed theme without writing anything.
    pub fn extract_theme(&self, theme_name: &str) -> Result<Extraction, SyncError> {
        let stylesheet = self.stylesheet_for(theme_name)?;
        Self::extract_stylesheet(&stylesheet)
    }

    /// Extracts a palette from a stylesheet file without writing anything.
    pub fn extract_stylesheet(path: &Path) -> Result<Extraction, SyncError> {
        if !path.is_file() {
            return Err(SyncError::StylesheetNotFound(path.to_path_buf()));
        }
        let content = read_stylesheet(path)?;
        Ok(extract_palette(&content))
    }

    /// Extracts the theme's palette and applies it to every enabled
    /// application.
    pub fn apply_theme(&self, theme_name: &str) -> Result<ApplyReport, SyncError> {
        let _guard = self.begin(theme_name)?;
        info!("Extracting colors from GTK theme: {}", theme_name);

        let extraction = self.extract_theme(theme_name)?;
        self.apply_extraction(theme_name, extraction)
    }

    /// Like [`ColorSync::apply_theme`] for an explicit stylesheet file;
    /// `label` is recorded as the theme name.
    pub fn apply_stylesheet(&self, label: &str, path: &Path) -> Result<ApplyReport, SyncError> {
        let _guard = self.begin(label)?;
        info!("Extracting colors from stylesheet: {}", path.display());

        let extraction = Self::extract_stylesheet(path)?;
        self.apply_extraction(label, extraction)
    }

    /// Theme-change hook: applies only when sync and auto-apply are enabled.
    pub fn on_theme_changed(&self, theme_name: &str) -> Result<ApplyReport, SyncError> {
        if !self.config.sync.enabled {
            debug!("Color sync is disabled, ignoring theme change to {}", theme_name);
            return Err(SyncError::Disabled);
        }
        if !self.config.sync.auto_apply {
            debug!("Color sync auto-apply is disabled, ignoring theme change to {}", theme_name);
            return Err(SyncError::AutoApplyDisabled);
        }

        self.apply_theme(theme_name)
    }

    /// Fills an application's template with `palette` without writing it.
    ///
    /// Falls back to the built-in template when the file does not exist.
    pub fn render(&self, app: &AppProfile, palette: &Palette) -> Result<String, SyncError> {
        let text = self
            .templates
            .load(app)?
            .unwrap_or_else(|| app.default_template.to_string());
        Ok(fill_template(app.name, &text, palette)?)
    }

    fn begin(&self, theme_name: &str) -> Result<FlightGuard<'_>, SyncError> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !in_flight.insert(theme_name.to_string()) {
            warn!("Apply for theme {} is already running", theme_name);
            return Err(SyncError::ApplyInProgress(theme_name.to_string()));
        }

        Ok(FlightGuard {
            in_flight: &self.in_flight,
            theme: theme_name.to_string(),
        })
    }

    fn apply_extraction(
        &self,
        theme_name: &str,
        extraction: Extraction,
    ) -> Result<ApplyReport, SyncError> {
        info!("Extracted {} colors", extraction.raw.len());
        if extraction.raw.is_empty() {
            warn!("No color declarations found, applying the default palette");
        } else if extraction.outcome.is_default() {
            warn!("Theme defines no mapped colors, applying the default palette");
        }

        let palette = extraction.outcome.palette.clone();
        SyncState::new(theme_name, palette.clone()).save(&self.state_path())?;

        if let Err(err) = self.templates.seed_defaults() {
            warn!("Failed to seed default templates: {:#}", err);
        }

        let destinations = self.write_destinations(&palette);
        let report = ApplyReport {
            theme: theme_name.to_string(),
            color_count: extraction.raw.len(),
            matched: extraction.outcome.matched,
            palette,
            destinations,
        };

        info!(
            "Applied {} colors: {} written, {} failed",
            theme_name,
            report.written_count(),
            report.failed_count()
        );
        Ok(report)
    }

    fn write_destinations(&self, palette: &Palette) -> Vec<DestinationReport> {
        let enabled = self.config.enabled_apps();
        let mut reports = Vec::new();
        let mut loaded: Vec<(&AppProfile, String)> = Vec::new();

        for app in &APP_PROFILES {
            let path = self.destination(app);
            let status = if self.config.is_app_enabled(app.name) {
                match self.templates.load(app) {
                    Ok(Some(text)) => {
                        loaded.push((app, text));
                        continue;
                    }
                    Ok(None) => DestinationStatus::TemplateMissing,
                    Err(err) => {
                        warn!("Failed to read template for {}: {:#}", app.name, err);
                        DestinationStatus::ReadFailed(format!("{err:#}"))
                    }
                }
            } else {
                DestinationStatus::Disabled
            };
            reports.push(DestinationReport {
                app: app.name,
                path,
                status,
            });
        }

        let filled = fill_enabled(
            loaded.iter().map(|(app, text)| (app.name, text.as_str())),
            &enabled,
            palette,
        );

        for ((app, _), result) in loaded.iter().zip(filled) {
            let path = self.destination(app);
            let status = match result.output {
                Ok(output) => match write_output(&path, &output) {
                    Ok(()) => {
                        info!("Applied colors to {}", path.display());
                        DestinationStatus::Written
                    }
                    Err(err) => {
                        warn!("{}", err);
                        DestinationStatus::WriteFailed(err.to_string())
                    }
                },
                Err(err) => {
                    warn!("Skipping {}: {}", app.name, err);
                    DestinationStatus::InvalidTemplate(err)
                }
            };
            reports.push(DestinationReport {
                app: app.name,
                path,
                status,
            });
        }

        reports.sort_by_key(|report| {
            APP_PROFILES
                .iter()
                .position(|app| app.name == report.app)
                .unwrap_or(usize::MAX)
        });
        reports
    }
}

/// Writes a generated config atomically (temp file + rename).
fn write_output(path: &Path, output: &str) -> Result<(), SyncError> {
    let temp_path = temp_path_for(path);
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&temp_path, output)?;
        fs::rename(&temp_path, path)
    };

    write().map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        SyncError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// `<file name>.tmp` next to `path`; destinations may have no extension.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
