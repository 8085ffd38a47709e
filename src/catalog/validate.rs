//! Load-time validation of catalog documents.

use std::collections::HashSet;
use std::fmt;

use super::schema::{CatalogDocument, Product};

/// Errors found while validating a catalog document.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A field value is invalid.
    InvalidField {
        entity: &'static str,
        id: String,
        field: &'static str,
        message: String,
    },
    /// Two entities in the same scope share an id.
    Duplicate { entity: &'static str, id: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidField {
                entity,
                id,
                field,
                message,
            } => write!(f, "{} '{}': invalid {}: {}", entity, id, field, message),
            CatalogError::Duplicate { entity, id } => {
                write!(f, "{}: duplicate id '{}'", entity, id)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl CatalogDocument {
    /// Check ids and prices across the whole document.
    ///
    /// Category and product ids are unique across the catalog, add-on ids
    /// within their product.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut category_ids = HashSet::new();
        let mut product_ids = HashSet::new();
        for category in &self.categories {
            require_id("category", &category.id)?;
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::Duplicate {
                    entity: "category",
                    id: category.id.clone(),
                });
            }

            for product in &category.products {
                validate_product(product)?;
                if !product_ids.insert(product.id.as_str()) {
                    return Err(CatalogError::Duplicate {
                        entity: "product",
                        id: product.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn validate_product(product: &Product) -> Result<(), CatalogError> {
    require_id("product", &product.id)?;
    require_price("product", &product.id, product.price)?;

    let mut addon_ids = HashSet::new();
    for addon in &product.addons {
        require_id("addon", &addon.id)?;
        require_price("addon", &addon.id, addon.price)?;
        if !addon_ids.insert(addon.id.as_str()) {
            return Err(CatalogError::Duplicate {
                entity: "addon",
                id: addon.id.clone(),
            });
        }
    }
    Ok(())
}

fn require_id(entity: &'static str, id: &str) -> Result<(), CatalogError> {
    if id.trim().is_empty() {
        return Err(CatalogError::InvalidField {
            entity,
            id: id.to_string(),
            field: "id",
            message: "must not be empty".into(),
        });
    }
    Ok(())
}

fn require_price(entity: &'static str, id: &str, price: f64) -> Result<(), CatalogError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::InvalidField {
            entity,
            id: id.to_string(),
            field: "price",
            message: format!("{} (must be a non-negative number)", price),
        });
    }
    Ok(())
}
