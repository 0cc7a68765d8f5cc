//! Stylesheet parsing, reference resolution and color normalization.
//!
//! All functions here are total: malformed input degrades to empty tables,
//! unresolved references or pass-through values, never to errors.

pub mod color;
pub mod resolver;
pub mod stylesheet;

// Re-export commonly used functions
pub use color::normalize_color;
pub use resolver::{resolve_references, MAX_RESOLVE_PASSES};
pub use stylesheet::{parse_stylesheet, RawColorTable};
