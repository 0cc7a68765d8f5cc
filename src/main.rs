//! Palette Sync - GTK theme colors for terminal and desktop tools
//!
//! Extracts a palette from a GTK 3 theme and writes it into alacritty,
//! waybar, kitty, rofi and dunst color configs.

use clap::{Parser, Subcommand};
use palette_sync::cli::{
    ApplyArgs, ConfigArgs, ExitCode, ExtractArgs, NotifyArgs, StatusArgs, TemplatesArgs,
    ThemesArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Palette Sync - apply GTK theme colors to terminal and desktop configs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a theme's colors and write every enabled application config
    Apply(ApplyArgs),
    /// Theme-change hook; applies only when auto-apply is enabled
    Notify(NotifyArgs),
    /// Print the palette extracted from a theme without writing anything
    Extract(ExtractArgs),
    /// List installed GTK 3 themes
    Themes(ThemesArgs),
    /// Manage application templates
    Templates(TemplatesArgs),
    /// Show or change configuration
    Config(ConfigArgs),
    /// Show the last applied theme and palette
    Status(StatusArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Apply(args) => args.execute(),
        Command::Notify(args) => args.execute(),
        Command::Extract(args) => args.execute(),
        Command::Themes(args) => args.execute(),
        Command::Templates(args) => args.execute(),
        Command::Config(args) => args.execute(),
        Command::Status(args) => args.execute(),
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::Success.code()),
        Err(err) => {
            eprintln!("Error: {}", err.message);
            std::process::exit(err.exit_code());
        }
    }
}
