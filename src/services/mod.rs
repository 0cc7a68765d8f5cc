//! Service layer for business logic.
//!
//! This module contains services that encapsulate theme discovery, palette
//! construction, template storage and the sync orchestration that ties
//! them together.

pub mod palette_builder;
pub mod sync;
pub mod templates;
pub mod themes;

// Re-export commonly used types and functions
pub use palette_builder::{build_palette, build_palette_with_report, BuildOutcome, COLOR_MAPPING};
pub use sync::{
    extract_palette, ApplyReport, ColorSync, DestinationReport, DestinationStatus, Extraction,
    SyncError,
};
pub use templates::{TemplateStatus, TemplateStore};
pub use themes::{default_theme_dirs, read_stylesheet, ThemeEntry, ThemeLocator};
