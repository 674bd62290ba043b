//! Catalog product types.
//!
//! Products are supplied by the static catalog at build time and are never
//! mutated at runtime. Prices are whole Ugandan shillings - there is no
//! fractional unit to carry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A product category.
///
/// The set is fixed; "All" in the browse UI is a filter, not a category, so
/// it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Cakes,
    Bakery,
    Snacks,
    #[serde(rename = "Fast Food")]
    FastFood,
    Chicken,
    Pizza,
    #[serde(rename = "Local Delights")]
    LocalDelights,
}

impl Category {
    /// All categories, in menu display order.
    pub const ALL: [Self; 7] = [
        Self::Cakes,
        Self::Bakery,
        Self::Snacks,
        Self::FastFood,
        Self::Chicken,
        Self::Pizza,
        Self::LocalDelights,
    ];

    /// The display label, matching the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cakes => "Cakes",
            Self::Bakery => "Bakery",
            Self::Snacks => "Snacks",
            Self::FastFood => "Fast Food",
            Self::Chicken => "Chicken",
            Self::Pizza => "Pizza",
            Self::LocalDelights => "Local Delights",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a category label.
#[derive(Debug, Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(String);

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog id (e.g. `"c1"`).
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Price in whole UGX.
    pub price: u64,
    pub description: String,
    /// Image URI.
    pub image: String,
    /// Highlighted on the home page.
    #[serde(default)]
    pub featured: bool,
}
