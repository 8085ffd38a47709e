//! # Store Configuration
//!
//! Settings shared by the CLI and the HTTP surface. Values come from
//! environment variables (optionally via a `.env` file) and are overridden by
//! command-line flags.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `STOREFRONT_CATALOG` | `cafe` | Built-in catalog name, or a path to a `.json` file |
//! | `STOREFRONT_NAME` | `Storefront` | Store name printed on receipts |
//! | `STOREFRONT_RECEIPT_WIDTH` | `32` | Receipt width in characters |
//! | `STOREFRONT_LISTEN` | `127.0.0.1:8080` | HTTP listen address |

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::{CatalogStore, builtin};
use crate::error::StorefrontError;
use crate::receipt;

pub const DEFAULT_CATALOG: &str = "cafe";
pub const DEFAULT_STORE_NAME: &str = "Storefront";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Where the catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// One of the catalogs embedded in the binary.
    Builtin(String),
    /// A JSON document on disk.
    File(PathBuf),
}

impl CatalogSource {
    /// Interpret a user-supplied value: built-in names first, then paths.
    pub fn parse(value: &str) -> Self {
        if builtin::is_builtin(value) {
            CatalogSource::Builtin(value.to_string())
        } else if value.ends_with(".json") || Path::new(value).exists() {
            CatalogSource::File(PathBuf::from(value))
        } else {
            // Unknown names surface as an error listing the built-ins on load.
            CatalogSource::Builtin(value.to_string())
        }
    }

    /// Load and validate the catalog.
    pub fn load(&self) -> Result<Arc<CatalogStore>, StorefrontError> {
        let store = match self {
            CatalogSource::Builtin(name) => builtin::by_name(name)?,
            CatalogSource::File(path) => CatalogStore::from_path(path)?,
        };
        Ok(Arc::new(store))
    }
}

/// Store-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub catalog: CatalogSource,
    pub store_name: String,
    pub receipt_width: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::Builtin(DEFAULT_CATALOG.to_string()),
            store_name: DEFAULT_STORE_NAME.to_string(),
            receipt_width: receipt::DEFAULT_WIDTH,
        }
    }
}

impl StoreConfig {
    /// Read settings from the environment (and `.env` if present).
    pub fn from_env() -> Result<Self, StorefrontError> {
        dotenv::dotenv().ok();
        let mut config = Self::default();

        if let Ok(catalog) = env::var("STOREFRONT_CATALOG") {
            config.catalog = CatalogSource::parse(&catalog);
        }
        if let Ok(name) = env::var("STOREFRONT_NAME") {
            config.store_name = name;
        }
        if let Ok(width) = env::var("STOREFRONT_RECEIPT_WIDTH") {
            config.receipt_width = width.trim().parse().map_err(|_| {
                StorefrontError::Config(format!(
                    "STOREFRONT_RECEIPT_WIDTH must be a number, got '{}'",
                    width
                ))
            })?;
        }

        config.validate()?;
        tracing::debug!(?config, "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StorefrontError> {
        if self.receipt_width < receipt::MIN_WIDTH {
            return Err(StorefrontError::Config(format!(
                "receipt width must be at least {} characters, got {}",
                receipt::MIN_WIDTH,
                self.receipt_width
            )));
        }
        if self.store_name.trim().is_empty() {
            return Err(StorefrontError::Config("store name must not be empty".into()));
        }
        Ok(())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "127.0.0.1:8080")
    pub listen_addr: String,
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Listen address from `STOREFRONT_LISTEN`, falling back to the default.
    pub fn listen_addr_from_env() -> String {
        env::var("STOREFRONT_LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(StoreConfig::default().validate().ok(), Some(()));
    }

    #[test]
    fn test_narrow_receipt_rejected() {
        let config = StoreConfig {
            receipt_width: 10,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(StorefrontError::Config(_))));
    }

    #[test]
    fn test_blank_store_name_rejected() {
        let config = StoreConfig {
            store_name: "  ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_catalog_source_parse() {
        assert_eq!(
            CatalogSource::parse("cafe"),
            CatalogSource::Builtin("cafe".into())
        );
        assert_eq!(
            CatalogSource::parse("menus/lunch.json"),
            CatalogSource::File(PathBuf::from("menus/lunch.json"))
        );
        assert_eq!(
            CatalogSource::parse("nonexistent"),
            CatalogSource::Builtin("nonexistent".into())
        );
    }

    #[test]
    fn test_catalog_source_load() {
        let store = CatalogSource::Builtin("cafe".into()).load().unwrap();
        assert!(store.product_count() > 0);
        assert!(CatalogSource::Builtin("nope".into()).load().is_err());
        assert!(
            CatalogSource::File(PathBuf::from("/definitely/missing.json"))
                .load()
                .is_err()
        );
    }
}
