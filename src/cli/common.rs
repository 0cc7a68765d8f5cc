//! Shared CLI error and exit-code types.

use std::fmt;

use crate::models::{Palette, RgbColor};
use crate::services::{ColorSync, SyncError};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input, unknown theme or application, invalid template
    ValidationError = 1,
    /// Reading or writing files failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or unknown entity.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<SyncError> for CliError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::ThemeNotFound(_)
            | SyncError::StylesheetNotFound(_)
            | SyncError::Disabled
            | SyncError::AutoApplyDisabled
            | SyncError::ApplyInProgress(_)
            | SyncError::Template(_) => Self::validation(err.to_string()),
            SyncError::Write { .. } => Self::io(err.to_string()),
            SyncError::Other(inner) => Self::io(format!("{inner:#}")),
        }
    }
}

/// Result type for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Builds the sync manager from the user's config and home directory.
pub fn load_sync() -> CliResult<ColorSync> {
    ColorSync::from_environment()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Prints a JSON value to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Prints every palette slot with a truecolor swatch.
pub fn print_palette(palette: &Palette) {
    for (slot, value) in palette.iter() {
        let swatch = RgbColor::from_palette_value(value).ansi_swatch(4);
        println!("  {:<12} {} {}", slot.name(), swatch, value);
    }
}
