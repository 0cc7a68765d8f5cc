//! `@name` reference resolution for raw color tables.
//!
//! GTK themes commonly alias colors:
//!
//! ```css
//! @define-color theme_bg_color #202020;
//! @define-color theme_selected_bg_color @theme_bg_color;
//! ```
//!
//! Resolution runs as a bounded fixed-point iteration. Every pass builds a
//! fresh table from the previous one, advancing the leftmost reference of
//! each value by one step. References to unknown names stay in place, and
//! reference cycles simply stop changing (or hit the pass limit) without
//! being reported.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::stylesheet::RawColorTable;

/// Upper bound on resolution passes.
pub const MAX_RESOLVE_PASSES: usize = 10;

static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(\w+)").expect("reference pattern is valid"));

/// Resolves `@name` references in `colors`.
///
/// Every input entry is present in the output. A value whose leftmost
/// reference names an unknown color is passed through unchanged.
///
/// # Examples
///
/// ```
/// use palette_sync::parser::{parse_stylesheet, resolve_references};
///
/// let raw = parse_stylesheet(
///     "@define-color base #202020; @define-color selected @base;",
/// );
/// let resolved = resolve_references(&raw);
/// assert_eq!(resolved["selected"], "#202020");
/// ```
pub fn resolve_references(colors: &RawColorTable) -> RawColorTable {
    let mut current = colors.clone();

    for _ in 0..MAX_RESOLVE_PASSES {
        let (next, changed) = resolve_pass(&current);
        current = next;
        if !changed {
            break;
        }
    }

    current
}

/// Runs one resolution pass, returning the new table and whether any value
/// changed.
fn resolve_pass(previous: &RawColorTable) -> (RawColorTable, bool) {
    let mut changed = false;

    let next = previous
        .iter()
        .map(|(name, value)| {
            let resolved = advance_reference(value, previous);
            if let Some(new_value) = &resolved {
                changed |= new_value != value;
            }
            (name.clone(), resolved.unwrap_or_else(|| value.clone()))
        })
        .collect();

    (next, changed)
}

/// Substitutes the leftmost known reference in `value`, or `None` when the
/// value has no reference or its leftmost one is unknown.
fn advance_reference(value: &str, table: &RawColorTable) -> Option<String> {
    if !value.contains('@') {
        return None;
    }

    let target = REFERENCE.captures(value)?.get(1)?.as_str();
    let replacement = table.get(target)?;

    // Replace every occurrence of exactly this identifier; `@base` must not
    // rewrite the prefix of `@base_dark`.
    let substituted = REFERENCE.replace_all(value, |captures: &Captures<'_>| {
        if &captures[1] == target {
            replacement.clone()
        } else {
            captures[0].to_string()
        }
    });

    Some(substituted.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> RawColorTable {
        entries
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn test_resolves_single_reference() {
        let resolved = resolve_references(&table(&[
            ("theme_bg_color", "#202020"),
            ("theme_selected_bg_color", "@theme_bg_color"),
        ]));

        assert_eq!(resolved["theme_selected_bg_color"], "#202020");
        assert_eq!(resolved["theme_bg_color"], "#202020");
    }

    #[test]
    fn test_resolves_chains() {
        let resolved = resolve_references(&table(&[
            ("a", "@b"),
            ("b", "@c"),
            ("c", "@d"),
            ("d", "rgb(1, 2, 3)"),
        ]));

        for name in ["a", "b", "c", "d"] {
            assert_eq!(resolved[name], "rgb(1, 2, 3)", "entry {name}");
        }
    }

    #[test]
    fn test_unknown_reference_passes_through() {
        let resolved = resolve_references(&table(&[("accent", "@does_not_exist")]));
        assert_eq!(resolved["accent"], "@does_not_exist");
    }

    #[test]
    fn test_reference_inside_function() {
        let resolved = resolve_references(&table(&[
            ("base", "#112233"),
            ("shade", "alpha(@base, 0.5)"),
        ]));
        assert_eq!(resolved["shade"], "alpha(#112233, 0.5)");
    }

    #[test]
    fn test_multiple_references_resolve_over_passes() {
        let resolved = resolve_references(&table(&[
            ("fg", "#ffffff"),
            ("bg", "#000000"),
            ("mixed", "mix(@fg, @bg, 0.5)"),
        ]));
        assert_eq!(resolved["mixed"], "mix(#ffffff, #000000, 0.5)");
    }

    #[test]
    fn test_repeated_reference_replaced_everywhere() {
        let resolved = resolve_references(&table(&[
            ("base", "#101010"),
            ("grad", "mix(@base, @base, 0.2)"),
        ]));
        assert_eq!(resolved["grad"], "mix(#101010, #101010, 0.2)");
    }

    #[test]
    fn test_identifier_prefix_is_not_rewritten() {
        let resolved = resolve_references(&table(&[
            ("base", "#111111"),
            ("base_dark", "#222222"),
            ("pair", "mix(@base, @base_dark, 0.5)"),
        ]));
        assert_eq!(resolved["pair"], "mix(#111111, #222222, 0.5)");
    }

    #[test]
    fn test_leftmost_unknown_reference_blocks_the_rest() {
        let resolved = resolve_references(&table(&[
            ("known", "#ffffff"),
            ("value", "mix(@unknown, @known, 0.5)"),
        ]));
        assert_eq!(resolved["value"], "mix(@unknown, @known, 0.5)");
    }

    #[test]
    fn test_already_resolved_table_is_unchanged() {
        let input = table(&[("a", "#000000"), ("b", "rgb(1, 2, 3)"), ("c", "seagreen")]);
        assert_eq!(resolve_references(&input), input);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let input = table(&[("a", "@b"), ("b", "#123456"), ("c", "@missing")]);
        let once = resolve_references(&input);
        assert_eq!(resolve_references(&once), once);
    }

    #[test]
    fn test_two_cycle_terminates_with_golden_residual() {
        let resolved = resolve_references(&table(&[("a", "@b"), ("b", "@a")]));

        // Pass 1 swaps the references, pass 2 sees only self-references.
        assert_eq!(resolved["a"], "@a");
        assert_eq!(resolved["b"], "@b");
    }

    #[test]
    fn test_self_reference_is_stable() {
        let resolved = resolve_references(&table(&[("a", "@a")]));
        assert_eq!(resolved["a"], "@a");
    }

    #[test]
    fn test_growing_cycle_stops_at_pass_limit() {
        let resolved = resolve_references(&table(&[("a", "x @b"), ("b", "y @a")]));

        // The values keep growing every pass; the bound must stop them.
        assert!(resolved["a"].contains('@'));
        assert!(resolved["a"].len() < 10_000);
    }

    #[test]
    fn test_pass_is_computed_from_previous_table() {
        let (next, changed) = resolve_pass(&table(&[("a", "@b"), ("b", "@c"), ("c", "#000000")]));

        assert!(changed);
        // One step per pass: `a` picks up b's previous value, not c's.
        assert_eq!(next["a"], "@c");
        assert_eq!(next["b"], "#000000");
    }

    #[test]
    fn test_empty_table() {
        assert!(resolve_references(&RawColorTable::new()).is_empty());
    }
}
