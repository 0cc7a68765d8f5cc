//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the config directory layout.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Palette Sync";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "palette-sync";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "PaletteSync";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "PALETTE_SYNC_CONFIG_DIR";
