//! Color declaration extraction from GTK stylesheets.
//!
//! Two declaration forms are recognized:
//!
//! ```css
//! @define-color theme_bg_color #242424;
//! --accent-bg-color: rgb(53, 132, 228);
//! ```
//!
//! Everything else in the stylesheet (selectors, rules, comments) is ignored.
//! The scan is best-effort: a declaration that does not match the grammar is
//! skipped and parsing never fails. A value must end with `;` on the line it
//! starts on and must not be blank.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Color name → raw declared value (possibly an `@name` reference).
pub type RawColorTable = BTreeMap<String, String>;

/// `@define-color <name> <value>;`
static DEFINE_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@define-color\s+([A-Za-z0-9_]+)\s+([#@\w(),.\t ]+);")
        .expect("define-color pattern is valid")
});

/// `--<word>-<word>...: <value>;`
static CSS_VARIABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"--([A-Za-z0-9_]+-[A-Za-z0-9_]+(?:-[A-Za-z0-9_]+)*)\s*:\s*([#@\w(),.\t ]+);")
        .expect("css variable pattern is valid")
});

/// Extracts every color declaration from `content`.
///
/// Later declarations of the same name overwrite earlier ones. Values are
/// trimmed. A stylesheet without declarations yields an empty table.
///
/// # Examples
///
/// ```
/// use palette_sync::parser::parse_stylesheet;
///
/// let table = parse_stylesheet("@define-color theme_bg_color #202020;");
/// assert_eq!(table["theme_bg_color"], "#202020");
/// ```
pub fn parse_stylesheet(content: &str) -> RawColorTable {
    let mut colors = RawColorTable::new();

    collect_declarations(&DEFINE_COLOR, content, &mut colors);
    // Variable names always contain '-', define-color names never do, so the
    // two passes cannot overwrite each other.
    collect_declarations(&CSS_VARIABLE, content, &mut colors);

    colors
}

fn collect_declarations(pattern: &Regex, content: &str, colors: &mut RawColorTable) {
    for captures in pattern.captures_iter(content) {
        let (Some(name), Some(value)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        let value = value.as_str().trim();
        if value.is_empty() {
            continue;
        }
        colors.insert(name.as_str().to_string(), value.to_string());
    }
}
