//! Template management commands.

use crate::cli::common::{load_sync, print_json, CliError, CliResult};
use crate::services::{ColorSync, TemplateStatus};
use crate::template::{app_names, find_app, AppProfile, APP_PROFILES};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Manage application templates
#[derive(Debug, Clone, Args)]
pub struct TemplatesArgs {
    /// Template subcommand
    #[command(subcommand)]
    pub command: TemplatesCommand,
}

/// Template subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum TemplatesCommand {
    /// List applications and their template files
    List(ListArgs),
    /// Print an application's template
    Show(ShowArgs),
    /// Validate every template file
    Check(CheckArgs),
    /// Restore built-in templates
    Reset(ResetArgs),
    /// Fill a template and print the result without writing it
    Render(RenderArgs),
}

/// List templates
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print a template
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Application name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Validate templates
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Restore built-in templates
#[derive(Debug, Clone, Args)]
pub struct ResetArgs {
    /// Application name (all applications when omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}

/// Render a template
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Application name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Theme to take colors from (defaults to the last applied palette)
    #[arg(value_name = "THEME")]
    pub theme: Option<String>,
}

/// Template entry for JSON output
#[derive(Debug, Serialize)]
struct TemplateInfo {
    app: &'static str,
    template: String,
    destination: String,
    enabled: bool,
    exists: bool,
    include_hint: &'static str,
}

/// Check result for JSON output
#[derive(Debug, Serialize)]
struct CheckInfo {
    app: &'static str,
    status: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    slots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl TemplatesArgs {
    /// Execute templates subcommand
    pub fn execute(&self) -> CliResult<()> {
        let sync = load_sync()?;
        match &self.command {
            TemplatesCommand::List(args) => execute_list(&sync, args),
            TemplatesCommand::Show(args) => execute_show(&sync, args),
            TemplatesCommand::Check(args) => execute_check(&sync, args),
            TemplatesCommand::Reset(args) => execute_reset(&sync, args),
            TemplatesCommand::Render(args) => execute_render(&sync, args),
        }
    }
}

fn lookup_app(name: &str) -> CliResult<&'static AppProfile> {
    find_app(name).ok_or_else(|| {
        CliError::validation(format!(
            "Unknown application '{}'. Known: {}",
            name,
            app_names().join(", ")
        ))
    })
}

fn execute_list(sync: &ColorSync, args: &ListArgs) -> CliResult<()> {
    let infos: Vec<TemplateInfo> = APP_PROFILES
        .iter()
        .map(|app| {
            let template = sync.templates().path_for(app);
            TemplateInfo {
                app: app.name,
                exists: template.is_file(),
                template: template.to_string_lossy().to_string(),
                destination: sync.destination(app).to_string_lossy().to_string(),
                enabled: sync.config().is_app_enabled(app.name),
                include_hint: app.include_hint,
            }
        })
        .collect();

    if args.json {
        return print_json(&infos);
    }

    println!("Templates in {}", sync.templates().dir().display());
    println!();
    for info in &infos {
        let state = match (info.enabled, info.exists) {
            (false, _) => "disabled",
            (true, true) => "enabled",
            (true, false) => "enabled, not seeded",
        };
        println!("{:<10} {} -> {}  [{}]", info.app, info.template, info.destination, state);
    }
    Ok(())
}

fn execute_show(sync: &ColorSync, args: &ShowArgs) -> CliResult<()> {
    let app = lookup_app(&args.name)?;
    let text = sync
        .templates()
        .load(app)
        .map_err(|e| CliError::io(format!("{e:#}")))?
        .unwrap_or_else(|| app.default_template.to_string());

    print!("{text}");
    Ok(())
}

fn execute_check(sync: &ColorSync, args: &CheckArgs) -> CliResult<()> {
    let mut results = Vec::new();
    for app in &APP_PROFILES {
        let status = sync
            .templates()
            .check(app)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        results.push((app.name, status));
    }

    let invalid = results
        .iter()
        .filter(|(_, status)| matches!(status, TemplateStatus::Invalid(_)))
        .count();

    if args.json {
        let infos: Vec<CheckInfo> = results
            .into_iter()
            .map(|(app, status)| match status {
                TemplateStatus::Valid(slots) => CheckInfo {
                    app,
                    status: "valid",
                    slots,
                    error: None,
                },
                TemplateStatus::Invalid(err) => CheckInfo {
                    app,
                    status: "invalid",
                    slots: Vec::new(),
                    error: Some(err.to_string()),
                },
                TemplateStatus::Missing => CheckInfo {
                    app,
                    status: "missing",
                    slots: Vec::new(),
                    error: None,
                },
            })
            .collect();
        print_json(&infos)?;
    } else {
        for (app, status) in &results {
            match status {
                TemplateStatus::Valid(slots) => {
                    println!("✓ {app}: {} placeholders", slots.len());
                }
                TemplateStatus::Invalid(err) => println!("✗ {app}: {err}"),
                TemplateStatus::Missing => println!("- {app}: missing (built-in default is used)"),
            }
        }
    }

    if invalid > 0 {
        return Err(CliError::validation(format!(
            "{invalid} template(s) failed validation"
        )));
    }
    Ok(())
}

fn execute_reset(sync: &ColorSync, args: &ResetArgs) -> CliResult<()> {
    let apps: Vec<&AppProfile> = match &args.name {
        Some(name) => vec![lookup_app(name)?],
        None => APP_PROFILES.iter().collect(),
    };

    for app in apps {
        let path = sync
            .templates()
            .reset(app)
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        println!("Reset {} template: {}", app.name, path.display());
    }
    Ok(())
}

fn execute_render(sync: &ColorSync, args: &RenderArgs) -> CliResult<()> {
    let app = lookup_app(&args.name)?;

    let palette = if let Some(theme) = &args.theme {
        sync.extract_theme(theme)?.outcome.palette
    } else {
        sync.last_applied()
            .map_err(|e| CliError::io(format!("{e:#}")))?
            .map(|state| state.colors)
            .unwrap_or_default()
    };

    let output = sync.render(app, &palette)?;
    print!("{output}");
    Ok(())
}
