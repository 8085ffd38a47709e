//! # Catalog Store
//!
//! Static categories and products, loaded once from a JSON document and
//! read-only afterwards.
//!
//! ## Example
//!
//! ```
//! use storefront::catalog::CatalogStore;
//!
//! let json = r#"{
//!     "categories": [
//!         {"id": "drinks", "name": "Drinks", "products": [
//!             {"id": "p1", "name": "Latte", "price": 4.0, "image": "☕",
//!              "addons": [{"id": "a1", "name": "Extra Shot", "price": 1.0}]}
//!         ]}
//!     ]
//! }"#;
//!
//! let catalog = CatalogStore::from_json(json).unwrap();
//! assert_eq!(catalog.products_for_category("drinks").len(), 1);
//! assert!(catalog.products_for_category("nope").is_empty());
//! ```

pub mod builtin;
mod schema;
mod validate;

pub use schema::{Addon, CatalogDocument, Category, Product};
pub use validate::CatalogError;

use std::path::Path;

use crate::error::StorefrontError;

/// Validated, immutable catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    categories: Vec<Category>,
}

impl CatalogStore {
    /// Build a store from an already parsed document.
    pub fn new(document: CatalogDocument) -> Result<Self, CatalogError> {
        document.validate()?;
        Ok(Self {
            categories: document.categories,
        })
    }

    /// Parse and validate a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, StorefrontError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let store = Self::new(document)?;
        tracing::info!(
            categories = store.categories.len(),
            products = store.product_count(),
            "catalog loaded"
        );
        Ok(store)
    }

    /// Read a JSON catalog document from disk.
    pub fn from_path(path: &Path) -> Result<Self, StorefrontError> {
        tracing::debug!(path = %path.display(), "reading catalog file");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All categories, in document order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id.
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Products of the given category. Unknown ids yield an empty slice.
    pub fn products_for_category(&self, category_id: &str) -> &[Product] {
        self.category(category_id)
            .map(|c| c.products.as_slice())
            .unwrap_or(&[])
    }

    /// First product with this id, searching categories in order.
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.categories
            .iter()
            .flat_map(|c| c.products.iter())
            .find(|p| p.id == product_id)
    }

    /// Id of the first category, the initial browse selection.
    pub fn first_category_id(&self) -> Option<&str> {
        self.categories.first().map(|c| c.id.as_str())
    }

    /// Total number of products across all categories.
    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|c| c.products.len()).sum()
    }
}
