//! Built-in catalogs embedded at compile time from `data/`.

use include_dir::{Dir, include_dir};

use super::CatalogStore;
use crate::error::StorefrontError;

/// Embedded catalog documents (`data/<name>.json`).
static CATALOG_DATA: Dir = include_dir!("$CARGO_MANIFEST_DIR/data");

/// Names of all built-in catalogs, sorted.
pub fn list() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CATALOG_DATA
        .files()
        .filter_map(|f| {
            let path = f.path();
            match path.extension().and_then(|e| e.to_str()) {
                Some("json") => path.file_stem().and_then(|s| s.to_str()),
                _ => None,
            }
        })
        .collect();
    names.sort_unstable();
    names
}

/// Check if a name refers to a built-in catalog.
pub fn is_builtin(name: &str) -> bool {
    list().contains(&name)
}

/// Load a built-in catalog by name.
pub fn by_name(name: &str) -> Result<CatalogStore, StorefrontError> {
    let file = CATALOG_DATA
        .get_file(format!("{}.json", name))
        .ok_or_else(|| {
            StorefrontError::Config(format!(
                "Unknown catalog '{}'. Available: {}",
                name,
                list().join(", ")
            ))
        })?;
    let json = file
        .contents_utf8()
        .ok_or_else(|| StorefrontError::Config(format!("Catalog '{}' is not UTF-8", name)))?;
    CatalogStore::from_json(json)
}
