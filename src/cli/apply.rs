//! Apply and theme-change hook commands.

use crate::cli::common::{load_sync, print_json, print_palette, CliError, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::models::Palette;
use crate::services::{ApplyReport, ColorSync, DestinationStatus, SyncError};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Extract a theme's colors and write every enabled application config
#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// GTK theme name (defaults to the last applied theme)
    #[arg(value_name = "THEME")]
    pub theme: Option<String>,

    /// Read colors from this stylesheet instead of an installed theme
    #[arg(long, value_name = "FILE", conflicts_with = "theme")]
    pub stylesheet: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Theme-change hook; applies only when sync and auto-apply are enabled
#[derive(Debug, Clone, Args)]
pub struct NotifyArgs {
    /// Name of the newly selected GTK theme
    #[arg(value_name = "THEME")]
    pub theme: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON view of an apply report
#[derive(Debug, Serialize)]
struct ApplyOutput<'a> {
    theme: &'a str,
    color_count: usize,
    matched: &'a [&'static str],
    palette: &'a Palette,
    destinations: Vec<DestinationOutput<'a>>,
}

#[derive(Debug, Serialize)]
struct DestinationOutput<'a> {
    app: &'a str,
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ApplyArgs {
    /// Execute apply command
    pub fn execute(&self) -> CliResult<()> {
        let sync = load_sync()?;

        let report = if let Some(path) = &self.stylesheet {
            let label = path
                .file_stem()
                .map_or_else(|| "stylesheet".to_string(), |s| s.to_string_lossy().to_string());
            sync.apply_stylesheet(&label, path)?
        } else {
            let theme = resolve_theme(&sync, self.theme.as_deref())?;
            sync.apply_theme(&theme)?
        };

        output_report(&report, self.json)
    }
}

impl NotifyArgs {
    /// Execute notify command
    pub fn execute(&self) -> CliResult<()> {
        let sync = load_sync()?;

        match sync.on_theme_changed(&self.theme) {
            Ok(report) => output_report(&report, self.json),
            Err(err @ (SyncError::Disabled | SyncError::AutoApplyDisabled)) => {
                if self.json {
                    print_json(&serde_json::json!({
                        "theme": self.theme,
                        "applied": false,
                        "reason": err.to_string(),
                    }))
                } else {
                    println!("Not applied: {err}");
                    Ok(())
                }
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Picks the explicit theme, or falls back to the last applied one.
fn resolve_theme(sync: &ColorSync, theme: Option<&str>) -> CliResult<String> {
    if let Some(theme) = theme {
        return Ok(theme.to_string());
    }

    let state = sync
        .last_applied()
        .map_err(|e| CliError::io(format!("{e:#}")))?;

    state.map(|s| s.theme).ok_or_else(|| {
        CliError::validation(format!(
            "No theme given and no theme has been applied yet. Run: {APP_BINARY_NAME} apply <THEME>"
        ))
    })
}

fn output_report(report: &ApplyReport, json: bool) -> CliResult<()> {
    if json {
        let output = ApplyOutput {
            theme: &report.theme,
            color_count: report.color_count,
            matched: &report.matched,
            palette: &report.palette,
            destinations: report
                .destinations
                .iter()
                .map(|d| DestinationOutput {
                    app: d.app,
                    path: d.path.to_string_lossy().to_string(),
                    status: d.status.label(),
                    error: status_detail(&d.status),
                })
                .collect(),
        };
        return print_json(&output);
    }

    println!(
        "Applied theme '{}' ({} colors extracted)",
        report.theme, report.color_count
    );
    println!();
    print_palette(&report.palette);
    println!();

    for destination in &report.destinations {
        let detail = status_detail(&destination.status)
            .map(|e| format!(" ({e})"))
            .unwrap_or_default();
        println!(
            "  {:<10} {:<17} {}{}",
            destination.app,
            destination.status.label(),
            destination.path.display(),
            detail
        );
    }

    Ok(())
}

fn status_detail(status: &DestinationStatus) -> Option<String> {
    match status {
        DestinationStatus::ReadFailed(msg) | DestinationStatus::WriteFailed(msg) => {
            Some(msg.clone())
        }
        DestinationStatus::InvalidTemplate(err) => Some(err.to_string()),
        DestinationStatus::Written
        | DestinationStatus::Disabled
        | DestinationStatus::TemplateMissing => None,
    }
}
