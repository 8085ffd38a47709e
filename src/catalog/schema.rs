//! JSON schema types for catalog documents.
//!
//! These are also the in-memory catalog types: once a document is loaded and
//! validated the values are never mutated.

use serde::{Deserialize, Serialize};

/// Top-level catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Categories in display order.
    pub categories: Vec<Category>,
}

/// A named group of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A product available for purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    /// Decorative glyph or image URL.
    #[serde(default)]
    pub image: String,
    /// Optional priced extras, in display order.
    #[serde(default)]
    pub addons: Vec<Addon>,
}

impl Product {
    /// Look up one of this product's add-ons by id.
    pub fn addon(&self, addon_id: &str) -> Option<&Addon> {
        self.addons.iter().find(|a| a.id == addon_id)
    }
}

/// An optional priced extra attachable to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    pub id: String,
    pub name: String,
    pub price: f64,
}
