//! Prices as WooGraphQL formats them.
//!
//! The backend returns prices as display strings that may carry markup,
//! HTML entities, a currency symbol, and locale-specific separators
//! (`"<span>120.000&nbsp;&#8363;</span>"`, `"$10.00 - $25.00"`). A [`Price`]
//! keeps the cleaned display text and, when one can be read, the decimal
//! amount of the first figure in it.
//!
//! Separator rule: when both `.` and `,` appear, the last one is the decimal
//! separator. When only one kind appears, it is a thousands separator if
//! every occurrence is followed by exactly three digits, and a decimal
//! separator otherwise.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A formatted price with its parsed amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Display text with markup and entities removed.
    pub display: String,
    /// Amount of the first figure in the text, if any.
    pub amount: Option<Decimal>,
}

impl Price {
    /// Parse a backend price string.
    ///
    /// Returns `None` for missing or blank input so callers can fall back to
    /// another price field.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let display = strip_markup(raw?);
        if display.is_empty() {
            return None;
        }
        let amount = first_amount(&display);
        Some(Self { display, amount })
    }

    /// Whether a numeric amount could be read.
    #[must_use]
    pub const fn has_amount(&self) -> bool {
        self.amount.is_some()
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

/// Remove tags, decode the handful of entities WooCommerce emits, and
/// collapse whitespace.
fn strip_markup(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&#8363;", "₫")
        .replace("&#36;", "$")
        .replace("&euro;", "€")
        .replace("&#8364;", "€")
        .replace("&ndash;", "-")
        .replace("&#8211;", "-")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the first contiguous run of digits and separators as a decimal.
fn first_amount(text: &str) -> Option<Decimal> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let figure: String = text
        .get(start..)?
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    let figure = figure.trim_end_matches(['.', ',']);

    let last_dot = figure.rfind('.');
    let last_comma = figure.rfind(',');
    let decimal_sep = match (last_dot, last_comma) {
        (Some(d), Some(c)) => Some(if d > c { '.' } else { ',' }),
        (Some(_), None) => decimal_if_not_grouping(figure, '.'),
        (None, Some(_)) => decimal_if_not_grouping(figure, ','),
        (None, None) => None,
    };

    let normalized: String = match decimal_sep {
        Some(sep) => {
            let (int_part, frac_part) = figure.rsplit_once(sep)?;
            let int_digits: String = int_part.chars().filter(char::is_ascii_digit).collect();
            format!("{int_digits}.{frac_part}")
        }
        None => figure.chars().filter(char::is_ascii_digit).collect(),
    };

    Decimal::from_str(&normalized).ok()
}

/// `Some(sep)` when `sep` acts as a decimal separator in `figure`.
fn decimal_if_not_grouping(figure: &str, sep: char) -> Option<char> {
    let mut groups = figure.split(sep);
    groups.next();
    let grouping = groups.clone().count() > 0 && groups.all(|g| g.len() == 3);
    if grouping { None } else { Some(sep) }
}
