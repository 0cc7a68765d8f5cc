//! Data models for palettes and persisted sync state.
//!
//! Models are independent of file discovery and the CLI.

pub mod palette;
pub mod rgb;
pub mod sync_state;

// Re-export all model types
pub use palette::{Palette, PaletteSlot};
pub use rgb::RgbColor;
pub use sync_state::SyncState;
