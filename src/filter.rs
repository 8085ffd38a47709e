//! # Product Filter/Sort
//!
//! Search and ordering over a category's product list.
//!
//! ```
//! use storefront::catalog::CatalogStore;
//! use storefront::filter::{SortKey, filter_and_sort};
//!
//! let catalog = CatalogStore::from_json(r#"{"categories": [{"id": "d", "name": "Drinks",
//!     "products": [{"id": "1", "name": "Mocha", "price": 4.5},
//!                  {"id": "2", "name": "Latte", "price": 4.0}]}]}"#).unwrap();
//!
//! let view = filter_and_sort(catalog.products_for_category("d"), "LAT", SortKey::NameAsc);
//! assert_eq!(view.len(), 1);
//! assert_eq!(view[0].name, "Latte");
//! ```

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Product ordering selected in the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    /// Any unrecognized key: keep the filtered order.
    Unsorted,
}

impl SortKey {
    /// The four selectable keys, in dropdown order.
    pub const ALL: [SortKey; 4] = [
        SortKey::PriceDesc,
        SortKey::PriceAsc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Unsorted => "none",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::PriceAsc => "Price (Low to High)",
            SortKey::PriceDesc => "Price (High to Low)",
            SortKey::Unsorted => "Unsorted",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::NameAsc => locale_cmp(&a.name, &b.name),
            SortKey::NameDesc => locale_cmp(&b.name, &a.name),
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::Unsorted => Ordering::Equal,
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "name-asc" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            _ => SortKey::Unsorted,
        })
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter by search term, then stable-sort by `sort`.
///
/// The search is a case-insensitive substring match on the product name and
/// an empty term matches everything. Returns a new vector; `products` is left
/// untouched.
pub fn filter_and_sort(products: &[Product], search_term: &str, sort: SortKey) -> Vec<Product> {
    let needle = search_term.to_lowercase();
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| sort.compare(a, b));
    filtered
}

/// Locale-style string ordering.
///
/// Letters compare case-insensitively first. Among names equal ignoring
/// case, lowercase sorts before uppercase, then raw code points decide.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }
    a.chars()
        .map(char::is_uppercase)
        .cmp(b.chars().map(char::is_uppercase))
        .then_with(|| a.cmp(b))
}
