//! List installed GTK themes.

use crate::cli::common::{load_sync, print_json, CliResult};
use clap::Args;
use serde::Serialize;

/// List installed GTK 3 themes
#[derive(Debug, Clone, Args)]
pub struct ThemesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Theme entry for JSON output
#[derive(Debug, Serialize)]
struct ThemeOutput {
    name: String,
    path: String,
    has_stylesheet: bool,
}

impl ThemesArgs {
    /// Execute themes command
    pub fn execute(&self) -> CliResult<()> {
        let sync = load_sync()?;
        let themes = sync.locator().list_themes();

        if self.json {
            let output: Vec<ThemeOutput> = themes
                .into_iter()
                .map(|t| ThemeOutput {
                    name: t.name,
                    path: t.gtk3_dir.to_string_lossy().to_string(),
                    has_stylesheet: t.has_stylesheet,
                })
                .collect();
            return print_json(&output);
        }

        if themes.is_empty() {
            println!("No GTK 3 themes found in:");
            for dir in sync.locator().search_dirs() {
                println!("  {}", dir.display());
            }
            return Ok(());
        }

        for theme in &themes {
            let marker = if theme.has_stylesheet { "" } else { "  (no gtk.css)" };
            println!("{}{}", theme.name, marker);
        }
        Ok(())
    }
}
