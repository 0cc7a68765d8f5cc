//! Color value normalization to `#rrggbb`.

use once_cell::sync::Lazy;
use regex::Regex;

static RGB_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)").expect("rgb pattern is valid")
});

/// Converts a color value to lowercase `#rrggbb` where possible.
///
/// - Hex values are returned as-is (not validated).
/// - `rgb(r, g, b)` / `rgba(r, g, b, a)` are converted; channels are not
///   clamped, so a channel above 255 formats with more than two digits.
/// - Anything else (named colors, `hsl()`, unresolved `@refs`) is returned
///   unchanged apart from surrounding whitespace.
///
/// # Examples
///
/// ```
/// use palette_sync::parser::normalize_color;
///
/// assert_eq!(normalize_color("rgb(255, 0, 128)"), "#ff0080");
/// assert_eq!(normalize_color("#abc123"), "#abc123");
/// assert_eq!(normalize_color("seagreen"), "seagreen");
/// ```
pub fn normalize_color(color: &str) -> String {
    let color = color.trim();

    if color.starts_with('#') {
        return color.to_string();
    }

    if color.to_lowercase().contains("rgb") {
        if let Some(hex) = rgb_to_hex(color) {
            return hex;
        }
    }

    color.to_string()
}

fn rgb_to_hex(color: &str) -> Option<String> {
    let captures = RGB_FUNCTION.captures(color)?;
    let channel = |index: usize| captures.get(index)?.as_str().parse::<u64>().ok();

    let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
    Some(format!("#{r:02x}{g:02x}{b:02x}"))
}
