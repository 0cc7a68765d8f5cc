//! CLI command handlers for Palette Sync.
//!
//! Each subcommand is a clap `Args` struct with an `execute()` method
//! returning [`CliResult`].

pub mod apply;
pub mod common;
pub mod config;
pub mod extract;
pub mod status;
pub mod templates;
pub mod themes;

// Re-export types used by main.rs and tests
pub use apply::{ApplyArgs, NotifyArgs};
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use extract::ExtractArgs;
pub use status::StatusArgs;
pub use templates::TemplatesArgs;
pub use themes::ThemesArgs;
