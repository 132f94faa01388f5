//! Transport-product styling.
//!
//! Raw product codes are normalized into canonical categories, which key
//! both the badge-style lookup and icon resolution. The style table is an
//! explicit dependency injected into the renderer, never a hidden global,
//! so hosts (and tests) control exactly which products are styled.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Product code marking demand-responsive transport.
pub const DEMAND_RESPONSIVE_PRODUCT: &str = "taxi";

/// Badge background when no style is known for a product.
pub const NEUTRAL_BACKGROUND: &str = "#555";
/// Badge foreground when no style is known for a product.
pub const NEUTRAL_FOREGROUND: &str = "#fff";
/// Leg border when no style is known for a product.
pub const NEUTRAL_BORDER: &str = "#999";

/// Normalizes a raw product code into its canonical category.
///
/// First match wins; unknown codes pass through unchanged and never fail.
///
/// # Examples
///
/// ```
/// use journey_ui::style::canonical_category;
///
/// assert_eq!(canonical_category("national"), "express");
/// assert_eq!(canonical_category("regionalExp"), "regional");
/// assert_eq!(canonical_category("taxi"), "demand-responsive-bus");
/// assert_eq!(canonical_category("suburban"), "suburban");
/// ```
pub fn canonical_category(product: &str) -> &str {
    match product {
        "nationalExpress" | "nationalExp" | "national" => "express",
        "regionalExpress" | "regionalExp" | "regional" => "regional",
        "taxi" => "demand-responsive-bus",
        other => other,
    }
}

/// Foreground and background colors for a line badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Text color
    pub foreground: String,
    /// Badge/border color
    pub background: String,
}

impl Style {
    /// Creates a style from foreground and background colors.
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
        }
    }
}

/// Product-style lookup table, keyed by canonical category.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    styles: HashMap<String, Style>,
}

impl StyleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a style for a canonical category.
    pub fn insert(&mut self, category: impl Into<String>, style: Style) {
        self.styles.insert(category.into(), style);
    }

    /// Looks up the style for a canonical category.
    pub fn get(&self, category: &str) -> Option<&Style> {
        self.styles.get(category)
    }
}

impl FromIterator<(String, Style)> for StyleTable {
    fn from_iter<I: IntoIterator<Item = (String, Style)>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().collect(),
        }
    }
}

/// Resolves the badge style for a raw product code.
///
/// Demand-responsive transport gets a fixed black-on-amber style before any
/// table lookup. Everything else goes through the table by canonical
/// category, with `express` always forcing a black foreground regardless of
/// what the table stores. Unknown categories yield `None` and the renderer
/// falls back to the neutral constants.
pub fn line_style(table: &StyleTable, product: &str) -> Option<Style> {
    if product == DEMAND_RESPONSIVE_PRODUCT {
        return Some(Style::new("#000", "#fc0"));
    }

    let category = canonical_category(product);
    let mut style = table.get(category).cloned()?;
    if category == "express" {
        style.foreground = "#000".into();
    }
    Some(style)
}
