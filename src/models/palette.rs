//! The canonical 19-slot color palette.
//!
//! A [`Palette`] holds `background`, `foreground`, `cursor` and the sixteen
//! indexed terminal colors `color0`..`color15`. Every slot is always present;
//! values are canonical `#rrggbb` strings or whatever pass-through text the
//! normalizer could not convert.

use serde::de::Deserializer;
use serde::ser::{SerializeMap, SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Number of indexed terminal colors in a palette.
pub const INDEXED_COLORS: usize = 16;

/// Built-in fallback for the `background` slot.
pub const DEFAULT_BACKGROUND: &str = "#1e1e1e";
/// Built-in fallback for the `foreground` slot.
pub const DEFAULT_FOREGROUND: &str = "#d4d4d4";
/// Built-in fallback for the `cursor` slot.
pub const DEFAULT_CURSOR: &str = "#d4d4d4";

/// Built-in fallback for `color0`..`color15`.
pub const DEFAULT_COLORS: [&str; INDEXED_COLORS] = [
    "#000000", "#cd3131", "#0dbc79", "#e5e510", "#2472c8", "#bc3fbc", "#11a8cd", "#e5e5e5",
    "#666666", "#f14c4c", "#23d18b", "#f5f543", "#3b8eea", "#d670d6", "#29b8db", "#e5e5e5",
];

/// One of the 19 named slots of a [`Palette`].
///
/// These are also the only placeholder keys a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaletteSlot {
    /// Default background color
    Background,
    /// Default text color
    Foreground,
    /// Cursor color
    Cursor,
    /// Normal black
    Color0,
    /// Normal red
    Color1,
    /// Normal green
    Color2,
    /// Normal yellow
    Color3,
    /// Normal blue
    Color4,
    /// Normal magenta
    Color5,
    /// Normal cyan
    Color6,
    /// Normal white
    Color7,
    /// Bright black
    Color8,
    /// Bright red
    Color9,
    /// Bright green
    Color10,
    /// Bright yellow
    Color11,
    /// Bright blue
    Color12,
    /// Bright magenta
    Color13,
    /// Bright cyan
    Color14,
    /// Bright white
    Color15,
}

impl PaletteSlot {
    /// All slots in canonical order.
    pub const ALL: [Self; 19] = [
        Self::Background,
        Self::Foreground,
        Self::Cursor,
        Self::Color0,
        Self::Color1,
        Self::Color2,
        Self::Color3,
        Self::Color4,
        Self::Color5,
        Self::Color6,
        Self::Color7,
        Self::Color8,
        Self::Color9,
        Self::Color10,
        Self::Color11,
        Self::Color12,
        Self::Color13,
        Self::Color14,
        Self::Color15,
    ];

    /// The indexed slots `color0`..`color15` in order.
    pub const INDEXED: [Self; INDEXED_COLORS] = [
        Self::Color0,
        Self::Color1,
        Self::Color2,
        Self::Color3,
        Self::Color4,
        Self::Color5,
        Self::Color6,
        Self::Color7,
        Self::Color8,
        Self::Color9,
        Self::Color10,
        Self::Color11,
        Self::Color12,
        Self::Color13,
        Self::Color14,
        Self::Color15,
    ];

    /// The slot's key as used in templates and JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Cursor => "cursor",
            Self::Color0 => "color0",
            Self::Color1 => "color1",
            Self::Color2 => "color2",
            Self::Color3 => "color3",
            Self::Color4 => "color4",
            Self::Color5 => "color5",
            Self::Color6 => "color6",
            Self::Color7 => "color7",
            Self::Color8 => "color8",
            Self::Color9 => "color9",
            Self::Color10 => "color10",
            Self::Color11 => "color11",
            Self::Color12 => "color12",
            Self::Color13 => "color13",
            Self::Color14 => "color14",
            Self::Color15 => "color15",
        }
    }

    /// Index into `color0..color15`, or `None` for the three named slots.
    #[must_use]
    pub fn color_index(self) -> Option<usize> {
        Self::INDEXED.iter().position(|slot| *slot == self)
    }
}

impl fmt::Display for PaletteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.name() == s)
            .ok_or_else(|| format!("Unknown palette slot '{s}'"))
    }
}

/// A complete, immutable color palette.
///
/// Construct the built-in defaults with [`Palette::default`] and derive new
/// palettes with [`Palette::with_slot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    background: String,
    foreground: String,
    cursor: String,
    colors: [String; INDEXED_COLORS],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            foreground: DEFAULT_FOREGROUND.to_string(),
            cursor: DEFAULT_CURSOR.to_string(),
            colors: DEFAULT_COLORS.map(str::to_string),
        }
    }
}

impl Palette {
    /// Returns the value stored in `slot`.
    #[must_use]
    pub fn get(&self, slot: PaletteSlot) -> &str {
        match slot {
            PaletteSlot::Background => &self.background,
            PaletteSlot::Foreground => &self.foreground,
            PaletteSlot::Cursor => &self.cursor,
            indexed => indexed
                .color_index()
                .map_or("", |index| self.colors[index].as_str()),
        }
    }

    /// Returns a copy of this palette with `slot` set to `value`.
    #[must_use]
    pub fn with_slot(&self, slot: PaletteSlot, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(slot, value.into());
        next
    }

    /// Background color.
    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Foreground color.
    #[must_use]
    pub fn foreground(&self) -> &str {
        &self.foreground
    }

    /// Cursor color.
    #[must_use]
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Iterates all 19 slots with their values in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteSlot, &str)> + '_ {
        PaletteSlot::ALL.iter().map(move |slot| (*slot, self.get(*slot)))
    }

    // Only reachable through `with_slot` and the builder, which both own
    // the palette they mutate.
    pub(crate) fn set(&mut self, slot: PaletteSlot, value: String) {
        match slot {
            PaletteSlot::Background => self.background = value,
            PaletteSlot::Foreground => self.foreground = value,
            PaletteSlot::Cursor => self.cursor = value,
            indexed => {
                if let Some(index) = indexed.color_index() {
                    self.colors[index] = value;
                }
            }
        }
    }
}

/// Serializes `colors` as an ordered `{"color0": .., "color15": ..}` map.
struct IndexedColors<'a>(&'a [String; INDEXED_COLORS]);

impl Serialize for IndexedColors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(INDEXED_COLORS))?;
        for (slot, value) in PaletteSlot::INDEXED.iter().zip(self.0.iter()) {
            map.serialize_entry(slot.name(), value)?;
        }
        map.end()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Palette", 4)?;
        state.serialize_field("background", &self.background)?;
        state.serialize_field("foreground", &self.foreground)?;
        state.serialize_field("cursor", &self.cursor)?;
        state.serialize_field("colors", &IndexedColors(&self.colors))?;
        state.end()
    }
}

/// Wire shape of a palette; every field optional so partial files still load.
#[derive(Deserialize)]
struct PaletteRepr {
    background: Option<String>,
    foreground: Option<String>,
    cursor: Option<String>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = PaletteRepr::deserialize(deserializer)?;
        let mut palette = Self::default();

        if let Some(background) = repr.background {
            palette.background = background;
        }
        if let Some(foreground) = repr.foreground {
            palette.foreground = foreground;
        }
        if let Some(cursor) = repr.cursor {
            palette.cursor = cursor;
        }
        for (index, slot) in PaletteSlot::INDEXED.iter().enumerate() {
            if let Some(value) = repr.colors.get(slot.name()) {
                palette.colors[index].clone_from(value);
            }
        }

        Ok(palette)
    }
}
