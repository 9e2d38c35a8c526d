//! Per-view selection state.
//!
//! A [`ProductView`] is created when a product is shown and dropped when the
//! customer navigates away, so selections never leak between products.
//! Selection events mutate it directly; the matched variation is recomputed
//! from the current selection on every read rather than stored.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::attributes::{Dimension, normalize_value};
use super::matcher::resolve_variation;
use super::options::{ProductOptions, extract_options};
use crate::types::{Product, Variation};

/// The customer's current choice per dimension. `""` means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
}

impl Selection {
    /// Selected value for a dimension, `""` when unset.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Color => &self.color,
            Dimension::Size => &self.size,
        }
    }

    /// Set a dimension's value. Last write wins.
    pub fn set(&mut self, dimension: Dimension, value: impl Into<String>) {
        let slot = match dimension {
            Dimension::Color => &mut self.color,
            Dimension::Size => &mut self.size,
        };
        *slot = value.into();
    }

    /// Unset a dimension.
    pub fn clear(&mut self, dimension: Dimension) {
        self.set(dimension, String::new());
    }

    /// True when no dimension has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Dimension::ALL
            .into_iter()
            .all(|d| normalize_value(self.get(d)).is_empty())
    }
}

/// A selection event that does not fit the current product.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The value is not among the product's options for that dimension.
    #[error("{value:?} is not an available {dimension}")]
    UnknownOption {
        /// Dimension the value was offered for.
        dimension: Dimension,
        /// The rejected value.
        value: String,
    },
}

/// State of one product page view.
#[derive(Debug, Clone)]
pub struct ProductView {
    product: Arc<Product>,
    options: ProductOptions,
    selection: Selection,
}

impl ProductView {
    /// Open a view with a fresh, empty selection.
    #[must_use]
    pub fn new(product: Arc<Product>) -> Self {
        let options = extract_options(&product);
        Self {
            product,
            options,
            selection: Selection::default(),
        }
    }

    /// The product being viewed.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Shared handle to the product.
    #[must_use]
    pub fn product_arc(&self) -> Arc<Product> {
        Arc::clone(&self.product)
    }

    /// Selectable options, extracted once when the view opened.
    #[must_use]
    pub const fn options(&self) -> &ProductOptions {
        &self.options
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Handle a selection click.
    ///
    /// The value is stored normalized. A blank value unsets the dimension.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownOption`] if the value is not offered
    /// for the dimension; the previous selection is kept.
    pub fn select(&mut self, dimension: Dimension, raw: &str) -> Result<(), SelectionError> {
        let value = normalize_value(raw);
        if value.is_empty() {
            self.selection.clear(dimension);
            return Ok(());
        }
        if !self.options.contains(dimension, &value) {
            return Err(SelectionError::UnknownOption {
                dimension,
                value: raw.to_string(),
            });
        }
        self.selection.set(dimension, value);
        Ok(())
    }

    /// Apply each dimension of `selection` in order; blank values unset.
    ///
    /// # Errors
    ///
    /// Stops at the first value that is not offered.
    pub fn apply(&mut self, selection: &Selection) -> Result<(), SelectionError> {
        for dimension in Dimension::ALL {
            self.select(dimension, selection.get(dimension))?;
        }
        Ok(())
    }

    /// Unset a dimension.
    pub fn clear(&mut self, dimension: Dimension) {
        self.selection.clear(dimension);
    }

    /// The variation matching the current selection, computed now.
    #[must_use]
    pub fn resolved(&self) -> Option<&Variation> {
        resolve_variation(&self.product, &self.selection)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{variable_product, variation};

    fn view() -> ProductView {
        ProductView::new(Arc::new(variable_product(
            vec![
                variation(1, &[("pa_color", "Red"), ("pa_size", "M")]),
                variation(2, &[("pa_color", "Red"), ("pa_size", "L")]),
                variation(3, &[("pa_color", "Blue"), ("pa_size", "L")]),
            ],
            &[],
            &[],
        )))
    }

    #[test]
    fn test_new_view_starts_unselected() {
        let view = view();
        assert!(view.selection().is_empty());
        assert!(view.resolved().is_none());
        assert_eq!(view.options().colors, ["red", "blue"]);
    }

    #[test]
    fn test_select_then_resolve_tracks_latest_selection() {
        let mut view = view();
        view.select(Dimension::Color, "Red").unwrap();
        assert!(view.resolved().is_none());

        view.select(Dimension::Size, "L").unwrap();
        assert_eq!(view.resolved().map(|v| v.database_id.as_i64()), Some(2));

        view.select(Dimension::Color, "blue").unwrap();
        assert_eq!(view.resolved().map(|v| v.database_id.as_i64()), Some(3));
    }

    #[test]
    fn test_unknown_option_is_rejected_and_previous_kept() {
        let mut view = view();
        view.select(Dimension::Color, "red").unwrap();
        let err = view.select(Dimension::Color, "green");
        assert_eq!(
            err,
            Err(SelectionError::UnknownOption {
                dimension: Dimension::Color,
                value: "green".to_string(),
            })
        );
        assert_eq!(view.selection().color, "red");
    }

    #[test]
    fn test_blank_selection_clears() {
        let mut view = view();
        view.select(Dimension::Size, "M").unwrap();
        view.select(Dimension::Size, "  ").unwrap();
        assert_eq!(view.selection().size, "");
    }

    #[test]
    fn test_new_view_discards_previous_selection() {
        let mut first = view();
        first.select(Dimension::Color, "blue").unwrap();
        let next = ProductView::new(first.product_arc());
        assert!(next.selection().is_empty());
    }
}
