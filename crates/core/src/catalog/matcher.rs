//! Variation resolution.
//!
//! A selection resolves to a variation when it pins one down:
//!
//! - Every dimension the variations use is selected: the first variation in
//!   list order whose values equal the selection wins. Duplicate
//!   combinations in the catalog resolve to the earliest one.
//! - Some dimension is left open: unselected dimensions act as wildcards,
//!   and the result is the single remaining candidate, or nothing when
//!   several remain.
//!
//! With nothing selected this means a product with exactly one variation
//! resolves to it, and any other product resolves to nothing.

use std::collections::HashMap;

use super::attributes::{AttributeKey, Dimension, normalize_name, normalize_value};
use super::selection::Selection;
use crate::types::{Product, Variation};

/// A variation's attributes keyed by canonical name.
///
/// Unrecognized names are kept under [`AttributeKey::Other`] but play no
/// part in matching.
#[must_use]
pub fn variation_values(variation: &Variation) -> HashMap<AttributeKey, String> {
    let mut values = HashMap::with_capacity(variation.attributes.len());
    for attribute in &variation.attributes {
        values
            .entry(normalize_name(&attribute.name))
            .or_insert_with(|| normalize_value(&attribute.value));
    }
    values
}

/// Resolve the current selection to a concrete variation.
///
/// Pure: the same product and selection always give the same variation.
#[must_use]
pub fn resolve_variation<'a>(product: &'a Product, selection: &Selection) -> Option<&'a Variation> {
    let variations = product.variations();
    let keyed: Vec<_> = variations.iter().map(variation_values).collect();

    let constraints: Vec<(AttributeKey, String)> = Dimension::ALL
        .into_iter()
        .filter_map(|dimension| {
            let value = normalize_value(selection.get(dimension));
            (!value.is_empty()).then(|| (key_for(dimension), value))
        })
        .collect();

    let mut candidates = variations
        .iter()
        .zip(&keyed)
        .filter(|(_, values)| {
            constraints
                .iter()
                .all(|(key, wanted)| values.get(key).is_some_and(|have| have == wanted))
        })
        .map(|(variation, _)| variation);

    if fully_specified(&keyed, selection) {
        return candidates.next();
    }

    let first = candidates.next()?;
    candidates.next().is_none().then_some(first)
}

/// Whether every dimension used by some variation has a selected value.
fn fully_specified(keyed: &[HashMap<AttributeKey, String>], selection: &Selection) -> bool {
    let used: Vec<Dimension> = Dimension::ALL
        .into_iter()
        .filter(|dimension| {
            let key = key_for(*dimension);
            keyed
                .iter()
                .any(|values| values.get(&key).is_some_and(|v| !v.is_empty()))
        })
        .collect();

    !used.is_empty()
        && used
            .iter()
            .all(|dimension| !normalize_value(selection.get(*dimension)).is_empty())
}

const fn key_for(dimension: Dimension) -> AttributeKey {
    match dimension {
        Dimension::Color => AttributeKey::Color,
        Dimension::Size => AttributeKey::Size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{simple_product, variable_product, variation};

    fn selection(color: &str, size: &str) -> Selection {
        let mut selection = Selection::default();
        selection.set(Dimension::Color, color);
        selection.set(Dimension::Size, size);
        selection
    }

    fn red_m_red_l() -> Product {
        variable_product(
            vec![
                variation(1, &[("pa_color", "Red"), ("pa_size", "M")]),
                variation(2, &[("pa_color", "Red"), ("pa_size", "L")]),
            ],
            &[],
            &[],
        )
    }

    #[test]
    fn test_full_selection_resolves() {
        let product = red_m_red_l();
        let resolved = resolve_variation(&product, &selection("red", "l"));
        assert_eq!(resolved.map(|v| v.database_id.as_i64()), Some(2));
    }

    #[test]
    fn test_selection_is_normalized_before_matching() {
        let product = red_m_red_l();
        let resolved = resolve_variation(&product, &selection("  RED ", "M"));
        assert_eq!(resolved.map(|v| v.database_id.as_i64()), Some(1));
    }

    #[test]
    fn test_partial_selection_with_two_candidates_is_ambiguous() {
        let product = red_m_red_l();
        assert!(resolve_variation(&product, &selection("red", "")).is_none());
    }

    #[test]
    fn test_partial_selection_with_one_candidate_resolves() {
        let product = variable_product(
            vec![
                variation(1, &[("pa_color", "Red"), ("pa_size", "M")]),
                variation(2, &[("pa_color", "Blue"), ("pa_size", "L")]),
            ],
            &[],
            &[],
        );
        let resolved = resolve_variation(&product, &selection("blue", ""));
        assert_eq!(resolved.map(|v| v.database_id.as_i64()), Some(2));
    }

    #[test]
    fn test_no_match_returns_none() {
        let product = red_m_red_l();
        assert!(resolve_variation(&product, &selection("green", "m")).is_none());
    }

    #[test]
    fn test_duplicate_combination_picks_first() {
        let product = variable_product(
            vec![
                variation(7, &[("pa_color", "Red"), ("pa_size", "M")]),
                variation(8, &[("Color", "red"), ("Size", "m")]),
            ],
            &[],
            &[],
        );
        let resolved = resolve_variation(&product, &selection("red", "m"));
        assert_eq!(resolved.map(|v| v.database_id.as_i64()), Some(7));
    }

    #[test]
    fn test_single_variation_without_selection() {
        let product = variable_product(
            vec![variation(5, &[("pa_color", "Red"), ("pa_size", "M")])],
            &[],
            &[],
        );
        let resolved = resolve_variation(&product, &Selection::default());
        assert_eq!(resolved.map(|v| v.database_id.as_i64()), Some(5));
    }

    #[test]
    fn test_many_variations_without_selection() {
        assert!(resolve_variation(&red_m_red_l(), &Selection::default()).is_none());
    }

    #[test]
    fn test_single_dimension_product_fully_specified_by_color() {
        let product = variable_product(
            vec![
                variation(1, &[("pa_color", "Red"), ("pa_material", "cotton")]),
                variation(2, &[("pa_color", "Red"), ("pa_material", "linen")]),
            ],
            &[],
            &[],
        );
        // Material is not a matching dimension, so color alone pins the first.
        let resolved = resolve_variation(&product, &selection("red", ""));
        assert_eq!(resolved.map(|v| v.database_id.as_i64()), Some(1));
    }

    #[test]
    fn test_simple_product_never_resolves() {
        assert!(resolve_variation(&simple_product(), &selection("red", "m")).is_none());
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let product = red_m_red_l();
        let sel = selection("red", "m");
        let first = resolve_variation(&product, &sel).cloned();
        let second = resolve_variation(&product, &sel).cloned();
        assert_eq!(first, second);
    }
}
