//! # Error Types
//!
//! This module defines error types used throughout the storefront library.
//!
//! Cart, pricing and filter operations never fail: bad input is clamped or
//! ignored. Errors only come from loading catalogs, configuration and the
//! outer surfaces (CLI, HTTP).

use thiserror::Error;

use crate::catalog::CatalogError;

/// Main error type for storefront operations
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog document failed validation
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Invalid or missing configuration
    #[error("Config error: {0}")]
    Config(String),

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// Product id not present in the loaded catalog
    #[error("Unknown product '{0}'")]
    UnknownProduct(String),

    /// Malformed command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
