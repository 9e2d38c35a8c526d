//! Variant resolution for variable products.
//!
//! Raw product data flows one way through this module:
//!
//! ```text
//! Product ──extract_options──▶ ProductOptions (what can be picked)
//!    │
//!    └──── Selection (user events) ──resolve_variation──▶ Option<&Variation>
//! ```
//!
//! Everything here is synchronous and side-effect free.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use woo_storefront_core::catalog::{Dimension, ProductView};
//! # use woo_storefront_core::*;
//! # let product = Product {
//! #     id: GlobalId::new("p"), database_id: ProductId::new(1), slug: "tee".into(),
//! #     name: "Tee".into(), description: None, on_sale: false, average_rating: None,
//! #     image: None,
//! #     kind: ProductKind::Variable {
//! #         pricing: Pricing::default(), color_terms: vec![], size_terms: vec![],
//! #         variations: vec![Variation {
//! #             id: GlobalId::new("v"), database_id: VariationId::new(2), name: "Tee - Red".into(),
//! #             stock_status: StockStatus::InStock, stock_quantity: None, purchasable: true,
//! #             on_sale: false, pricing: Pricing::default(),
//! #             attributes: vec![Attribute::new("pa_color", "Red")],
//! #         }],
//! #     },
//! # };
//! let mut view = ProductView::new(Arc::new(product));
//! view.select(Dimension::Color, "Red")?;
//! assert_eq!(view.resolved().map(|v| v.database_id), Some(VariationId::new(2)));
//! # Ok::<(), woo_storefront_core::catalog::SelectionError>(())
//! ```

pub mod attributes;
pub mod matcher;
pub mod options;
pub mod selection;

pub use attributes::{AttributeKey, Dimension, normalize_name, normalize_value};
pub use matcher::{resolve_variation, variation_values};
pub use options::{ProductOptions, extract_options};
pub use selection::{ProductView, Selection, SelectionError};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::types::{
        Attribute, GlobalId, Pricing, Product, ProductId, ProductKind, StockStatus, Variation,
        VariationId,
    };

    pub fn variation(id: i64, attributes: &[(&str, &str)]) -> Variation {
        Variation {
            id: GlobalId::new(format!("variation-{id}")),
            database_id: VariationId::new(id),
            name: format!("Variation {id}"),
            stock_status: StockStatus::InStock,
            stock_quantity: None,
            purchasable: true,
            on_sale: false,
            pricing: Pricing::default(),
            attributes: attributes
                .iter()
                .map(|(name, value)| Attribute::new(*name, *value))
                .collect(),
        }
    }

    pub fn variable_product(
        variations: Vec<Variation>,
        color_terms: &[&str],
        size_terms: &[&str],
    ) -> Product {
        Product {
            id: GlobalId::new("product-100"),
            database_id: ProductId::new(100),
            slug: "ao-so-mi".to_string(),
            name: "Áo sơ mi".to_string(),
            description: None,
            on_sale: false,
            average_rating: None,
            image: None,
            kind: ProductKind::Variable {
                pricing: Pricing::default(),
                variations,
                color_terms: color_terms.iter().map(ToString::to_string).collect(),
                size_terms: size_terms.iter().map(ToString::to_string).collect(),
            },
        }
    }

    pub fn simple_product() -> Product {
        Product {
            id: GlobalId::new("product-200"),
            database_id: ProductId::new(200),
            slug: "mu".to_string(),
            name: "Mũ".to_string(),
            description: None,
            on_sale: false,
            average_rating: None,
            image: None,
            kind: ProductKind::Simple {
                pricing: Pricing::default(),
                stock_quantity: Some(10),
            },
        }
    }
}
