//! Extract command: show a theme's palette without writing anything.

use crate::cli::common::{load_sync, print_json, print_palette, CliError, CliResult};
use crate::parser::RawColorTable;
use crate::services::{ColorSync, Extraction};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Print the palette extracted from a theme or stylesheet
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// GTK theme name
    #[arg(value_name = "THEME", required_unless_present = "stylesheet")]
    pub theme: Option<String>,

    /// Read colors from this stylesheet instead of an installed theme
    #[arg(long, value_name = "FILE", conflicts_with = "theme")]
    pub stylesheet: Option<PathBuf>,

    /// Print the resolved declaration table instead of the palette
    #[arg(long)]
    pub raw: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RawOutput<'a> {
    declarations: &'a RawColorTable,
    resolved: &'a RawColorTable,
}

impl ExtractArgs {
    /// Execute extract command
    pub fn execute(&self) -> CliResult<()> {
        let extraction = match (&self.stylesheet, &self.theme) {
            (Some(path), _) => ColorSync::extract_stylesheet(path)?,
            (None, Some(theme)) => load_sync()?.extract_theme(theme)?,
            (None, None) => {
                return Err(CliError::validation(
                    "Either a theme name or --stylesheet must be given",
                ))
            }
        };

        match (self.raw, self.json) {
            (true, true) => print_json(&RawOutput {
                declarations: &extraction.raw,
                resolved: &extraction.resolved,
            }),
            (true, false) => {
                print_raw(&extraction);
                Ok(())
            }
            (false, true) => print_json(extraction.palette()),
            (false, false) => {
                print_summary(&extraction);
                Ok(())
            }
        }
    }
}

fn print_raw(extraction: &Extraction) {
    for (name, value) in &extraction.resolved {
        let original = &extraction.raw[name];
        if original == value {
            println!("{name} = {value}");
        } else {
            println!("{name} = {value}  (from {original})");
        }
    }
}

fn print_summary(extraction: &Extraction) {
    println!("{} color declarations found", extraction.raw.len());
    if extraction.outcome.matched.is_empty() {
        println!("No mapped theme colors; showing the default palette");
    } else {
        println!("Mapped: {}", extraction.outcome.matched.join(", "));
    }
    println!();
    print_palette(extraction.palette());
}
