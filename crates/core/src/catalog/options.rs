//! Selectable option extraction.

use serde::{Deserialize, Serialize};

use super::attributes::{Dimension, normalize_name, normalize_value};
use crate::types::{Product, ProductKind};

/// Distinct selectable values per dimension, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptions {
    /// Normalized color values.
    pub colors: Vec<String>,
    /// Normalized size values.
    pub sizes: Vec<String>,
}

impl ProductOptions {
    /// Values for one dimension.
    #[must_use]
    pub fn values(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Color => &self.colors,
            Dimension::Size => &self.sizes,
        }
    }

    /// Whether `value` (already normalized) is selectable for `dimension`.
    #[must_use]
    pub fn contains(&self, dimension: Dimension, value: &str) -> bool {
        self.values(dimension).iter().any(|v| v == value)
    }

    /// True when the product offers nothing to pick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty()
    }

    fn values_mut(&mut self, dimension: Dimension) -> &mut Vec<String> {
        match dimension {
            Dimension::Color => &mut self.colors,
            Dimension::Size => &mut self.sizes,
        }
    }
}

/// Derive the selectable colors and sizes for a product.
///
/// Non-variable products yield no options. Values come from the variations'
/// attributes in list order; a dimension that no variation names falls back
/// to the product-level term list for it.
#[must_use]
pub fn extract_options(product: &Product) -> ProductOptions {
    let ProductKind::Variable {
        variations,
        color_terms,
        size_terms,
        ..
    } = &product.kind
    else {
        return ProductOptions::default();
    };

    let mut options = ProductOptions::default();

    for variation in variations {
        for attribute in &variation.attributes {
            let Some(dimension) = normalize_name(&attribute.name).dimension() else {
                continue;
            };
            push_unique(options.values_mut(dimension), normalize_value(&attribute.value));
        }
    }

    for (dimension, terms) in [(Dimension::Color, color_terms), (Dimension::Size, size_terms)] {
        let values = options.values_mut(dimension);
        if values.is_empty() {
            for term in terms {
                push_unique(values, normalize_value(term));
            }
        }
    }

    options
}

/// Append `value` unless it is blank or already present.
fn push_unique(values: &mut Vec<String>, value: String) {
    if !value.is_empty() && !values.contains(&value) {
        values.push(value);
    }
}
