//! Placeholder substitution for application templates.
//!
//! A template is plain text containing `{slot}` tokens, where `slot` is one
//! of the 19 [`PaletteSlot`] names. Templates are parsed once into literal
//! and slot segments; any token-shaped `{name}` with an unknown name is
//! rejected at parse time. Braces that do not form a token (CSS blocks,
//! YAML flow maps with spaces) are ordinary text. There is no escape syntax.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{Palette, PaletteSlot};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid"));

/// Errors produced while loading a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template references a placeholder that is not a palette slot.
    #[error("template '{template}' uses unknown placeholder '{{{key}}}' at byte {offset}")]
    UnknownPlaceholder {
        /// Template name
        template: String,
        /// The offending key, without braces
        key: String,
        /// Byte offset of the opening brace
        offset: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(PaletteSlot),
}

/// A validated template, ready to be filled with any palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses and validates `text`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnknownPlaceholder`] for the first `{name}`
    /// token whose name is not a palette slot.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, TemplateError> {
        let name = name.into();
        let mut segments = Vec::new();
        let mut last = 0;

        for captures in PLACEHOLDER.captures_iter(text) {
            let (Some(token), Some(key)) = (captures.get(0), captures.get(1)) else {
                continue;
            };

            let slot = key.as_str().parse::<PaletteSlot>().map_err(|_| {
                TemplateError::UnknownPlaceholder {
                    template: name.clone(),
                    key: key.as_str().to_string(),
                    offset: token.start(),
                }
            })?;

            if token.start() > last {
                segments.push(Segment::Literal(text[last..token.start()].to_string()));
            }
            segments.push(Segment::Slot(slot));
            last = token.end();
        }

        if last < text.len() {
            segments.push(Segment::Literal(text[last..].to_string()));
        }

        Ok(Self { name, segments })
    }

    /// Template name (usually the application profile name).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slots referenced by this template, in order of first use.
    #[must_use]
    pub fn slots(&self) -> Vec<PaletteSlot> {
        let mut slots = Vec::new();
        for segment in &self.segments {
            if let Segment::Slot(slot) = segment {
                if !slots.contains(slot) {
                    slots.push(*slot);
                }
            }
        }
        slots
    }

    /// Substitutes every placeholder with the palette's value.
    #[must_use]
    pub fn fill(&self, palette: &Palette) -> String {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Slot(slot) => output.push_str(palette.get(*slot)),
            }
        }
        output
    }
}

/// Parses and fills `text` in one step.
///
/// # Examples
///
/// ```
/// use palette_sync::models::Palette;
/// use palette_sync::template::fill_template;
///
/// let output = fill_template("kitty", "background {background}\n", &Palette::default()).unwrap();
/// assert_eq!(output, "background #1e1e1e\n");
/// ```
pub fn fill_template(name: &str, text: &str, palette: &Palette) -> Result<String, TemplateError> {
    Ok(Template::parse(name, text)?.fill(palette))
}

/// Result of filling one template in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledTemplate {
    /// Template name
    pub name: String,
    /// Filled text, or why this template could not be used
    pub output: Result<String, TemplateError>,
}

/// Fills every enabled template independently.
///
/// Templates whose name maps to `false` in `enabled` are skipped; names
/// missing from the map count as enabled. A template that fails to parse
/// only fails its own entry. Output order follows `templates`.
pub fn fill_enabled<'a, I>(
    templates: I,
    enabled: &HashMap<String, bool>,
    palette: &Palette,
) -> Vec<FilledTemplate>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    templates
        .into_iter()
        .filter(|(name, _)| enabled.get(*name).copied().unwrap_or(true))
        .map(|(name, text)| FilledTemplate {
            name: name.to_string(),
            output: fill_template(name, text, palette),
        })
        .collect()
}
