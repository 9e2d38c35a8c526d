//! Attribute name/value canonicalization.
//!
//! The backend spells the same dimension many ways: `pa_color`,
//! `attribute_pa_color`, `Color`. Values arrive as slugs (`light_blue`) or
//! labels (`Light Blue`). Both sides are canonicalized before comparison.

use serde::{Deserialize, Serialize};

const ATTRIBUTE_PREFIX: &str = "attribute_";

/// A recognized variation dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Color,
    Size,
}

impl Dimension {
    /// All recognized dimensions, in display order.
    pub const ALL: [Self; 2] = [Self::Color, Self::Size];

    /// Canonical key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Size => "size",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical form of an attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Color,
    Size,
    /// Unrecognized name, lowercased with the `attribute_` prefix removed.
    Other(String),
}

impl AttributeKey {
    /// The recognized dimension this key maps to, if any.
    #[must_use]
    pub const fn dimension(&self) -> Option<Dimension> {
        match self {
            Self::Color => Some(Dimension::Color),
            Self::Size => Some(Dimension::Size),
            Self::Other(_) => None,
        }
    }
}

/// Canonicalize an attribute name.
///
/// Lowercases and strips a leading `attribute_`. Names containing `color`
/// map to [`AttributeKey::Color`], then names containing `size` map to
/// [`AttributeKey::Size`]; anything else passes through.
#[must_use]
pub fn normalize_name(raw: &str) -> AttributeKey {
    let lowered = raw.trim().to_lowercase();
    let stripped = lowered
        .strip_prefix(ATTRIBUTE_PREFIX)
        .unwrap_or(&lowered);

    if stripped.contains("color") {
        AttributeKey::Color
    } else if stripped.contains("size") {
        AttributeKey::Size
    } else {
        AttributeKey::Other(stripped.to_string())
    }
}

/// Canonicalize an attribute value to a slug.
///
/// Trims, lowercases, strips a leading `attribute_`, joins whitespace-separated
/// words with `-`, and turns `_` into `-`. Blank input yields `""`, meaning
/// "no value". Applying it twice gives the same result as applying it once.
#[must_use]
pub fn normalize_value(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped = lowered
        .strip_prefix(ATTRIBUTE_PREFIX)
        .unwrap_or(&lowered);

    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replace('_', "-")
}
