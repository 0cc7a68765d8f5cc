//! Mapping of GTK theme color names onto the canonical palette.

use crate::models::{Palette, PaletteSlot};
use crate::parser::{normalize_color, RawColorTable};

/// Theme color name → palette slot, applied in this order.
///
/// `background` and `foreground` have several sources; later entries win
/// when a theme defines more than one of them.
pub const COLOR_MAPPING: [(&str, PaletteSlot); 9] = [
    ("theme_bg_color", PaletteSlot::Background),
    ("theme_fg_color", PaletteSlot::Foreground),
    ("theme_base_color", PaletteSlot::Background),
    ("theme_text_color", PaletteSlot::Foreground),
    ("theme_selected_bg_color", PaletteSlot::Color4),
    ("theme_selected_fg_color", PaletteSlot::Foreground),
    ("warning_color", PaletteSlot::Color3),
    ("error_color", PaletteSlot::Color1),
    ("success_color", PaletteSlot::Color2),
];

/// A built palette together with the theme keys that contributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// The complete palette
    pub palette: Palette,
    /// Theme color names from [`COLOR_MAPPING`] found in the input
    pub matched: Vec<&'static str>,
}

impl BuildOutcome {
    /// True when the theme supplied none of the mapped colors.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.matched.is_empty()
    }
}

/// Builds a palette from a resolved color table.
///
/// Slots the theme does not supply keep their built-in defaults, so the
/// result is always complete.
pub fn build_palette(resolved: &RawColorTable) -> Palette {
    build_palette_with_report(resolved).palette
}

/// Like [`build_palette`], also reporting which theme keys matched.
pub fn build_palette_with_report(resolved: &RawColorTable) -> BuildOutcome {
    let mut palette = Palette::default();
    let mut matched = Vec::new();

    for (theme_key, slot) in COLOR_MAPPING {
        if let Some(value) = resolved.get(theme_key) {
            palette.set(slot, normalize_color(value));
            matched.push(theme_key);
        }
    }

    BuildOutcome { palette, matched }
}
