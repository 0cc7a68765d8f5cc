//! Status command: show the last applied scheme.

use crate::cli::common::{load_sync, print_json, print_palette, CliError, CliResult};
use crate::models::Palette;
use clap::Args;
use serde::Serialize;

/// Show the last applied theme and palette
#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StatusOutput<'a> {
    enabled: bool,
    auto_apply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    applied_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    palette: Option<&'a Palette>,
}

impl StatusArgs {
    /// Execute status command
    pub fn execute(&self) -> CliResult<()> {
        let sync = load_sync()?;
        let state = sync
            .last_applied()
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        let config = sync.config();

        if self.json {
            return print_json(&StatusOutput {
                enabled: config.sync.enabled,
                auto_apply: config.sync.auto_apply,
                theme: state.as_ref().map(|s| s.theme.as_str()),
                applied_at: state.as_ref().map(|s| s.applied_at.to_rfc3339()),
                palette: state.as_ref().map(|s| &s.colors),
            });
        }

        println!(
            "Sync: {}, auto-apply: {}",
            on_off(config.sync.enabled),
            on_off(config.sync.auto_apply)
        );

        let Some(state) = state else {
            println!("No color scheme has been applied yet.");
            return Ok(());
        };

        println!(
            "Last applied: {} at {}",
            state.theme,
            state.applied_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        println!();
        print_palette(&state.colors);
        Ok(())
    }
}

const fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
