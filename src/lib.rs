//! Palette Sync Library
//!
//! This library extracts a terminal color palette from a GTK 3 theme's
//! stylesheet and writes it into the color configs of terminal emulators,
//! status bars, launchers and notification daemons through user-editable
//! templates.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
pub mod template;
