//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::template::APP_PROFILES;
use clap::{ArgGroup, Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set sync switches
    Set(ConfigSetArgs),
    /// Enable or disable one application
    App(ConfigAppArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set sync switches
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Master switch for color synchronization
    #[arg(long, value_name = "BOOL")]
    enabled: Option<bool>,

    /// Apply automatically when the theme changes
    #[arg(long, value_name = "BOOL")]
    auto_apply: Option<bool>,
}

/// Enable or disable one application
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("switch").required(true).args(["enable", "disable"])))]
pub struct ConfigAppArgs {
    /// Application name
    #[arg(value_name = "NAME")]
    name: String,

    /// Write this application's config on apply
    #[arg(long)]
    enable: bool,

    /// Skip this application on apply
    #[arg(long)]
    disable: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_dir: String,
    sync: SyncOutput,
    paths: PathsOutput,
}

#[derive(Serialize, Debug)]
struct SyncOutput {
    enabled: bool,
    auto_apply: bool,
    applications: Vec<AppOutput>,
}

#[derive(Serialize, Debug)]
struct AppOutput {
    name: &'static str,
    enabled: bool,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    theme_dirs: Vec<String>,
    template_dir: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::App(args) => args.execute(),
        }
    }
}

fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

fn save_config(config: &Config) -> CliResult<()> {
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let config_dir = Config::config_dir()
            .map_err(|e| CliError::io(format!("Failed to locate config directory: {e}")))?;
        let home = dirs::home_dir().unwrap_or_default();

        let output = ConfigOutput {
            config_dir: config_dir.to_string_lossy().to_string(),
            sync: SyncOutput {
                enabled: config.sync.enabled,
                auto_apply: config.sync.auto_apply,
                applications: APP_PROFILES
                    .iter()
                    .map(|app| AppOutput {
                        name: app.name,
                        enabled: config.is_app_enabled(app.name),
                    })
                    .collect(),
            },
            paths: PathsOutput {
                theme_dirs: config
                    .theme_dirs(&home)
                    .iter()
                    .map(|p| p.to_string_lossy().to_string())
                    .collect(),
                template_dir: config
                    .template_dir(&config_dir)
                    .to_string_lossy()
                    .to_string(),
            },
        };

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.enabled.is_none() && self.auto_apply.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --enabled or --auto-apply",
            ));
        }

        let mut config = load_config()?;

        if let Some(enabled) = self.enabled {
            config.sync.enabled = enabled;
        }
        if let Some(auto_apply) = self.auto_apply {
            config.sync.auto_apply = auto_apply;
        }

        save_config(&config)?;
        println!("Configuration updated successfully.");
        Ok(())
    }
}

impl ConfigAppArgs {
    /// Execute app command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config()?;

        config
            .set_app_enabled(&self.name, self.enable)
            .map_err(|e| CliError::validation(e.to_string()))?;

        save_config(&config)?;
        println!(
            "{} {}.",
            self.name,
            if self.enable { "enabled" } else { "disabled" }
        );
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();
    println!("Config directory: {}", output.config_dir);
    println!();

    println!("Sync:");
    println!("  Enabled:    {}", output.sync.enabled);
    println!("  Auto-apply: {}", output.sync.auto_apply);
    println!();

    println!("Applications:");
    for app in &output.sync.applications {
        let state = if app.enabled { "enabled" } else { "disabled" };
        println!("  {:<10} {}", app.name, state);
    }
    println!();

    println!("Paths:");
    println!("  Templates: {}", output.paths.template_dir);
    println!("  Themes:");
    for dir in &output.paths.theme_dirs {
        println!("    {dir}");
    }
}
