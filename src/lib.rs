//! # Storefront - Point-of-Sale Cart Library
//!
//! Storefront is the in-memory core of a point-of-sale counter. It provides:
//!
//! - **Catalog**: categories of products with priced add-ons, loaded from JSON
//! - **Browsing**: case-insensitive search and four sort orders
//! - **Cart**: positional line-items with quantities and per-item add-ons
//! - **Pricing**: subtotal, fixed or percentage discount, grand total
//! - **Receipts**: fixed-width text receipts for checkout
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use storefront::{catalog::builtin, pricing::DiscountKind, Session};
//!
//! let catalog = Arc::new(builtin::by_name("cafe")?);
//! let mut session = Session::new(catalog);
//!
//! // Ring up a latte with two extra shots
//! session.add_product("latte")?;
//! session.cart_mut().toggle_addon(0, "extra-shot", 2);
//!
//! // Half off
//! session.discount_panel_mut().toggle();
//! session.discount_panel_mut().set_kind(DiscountKind::Percentage);
//! session.discount_panel_mut().set_value(50.0);
//!
//! let totals = session.totals();
//! assert_eq!(totals.subtotal, 6.0);
//! assert_eq!(totals.grand_total, 3.0);
//!
//! # Ok::<(), storefront::StorefrontError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Catalog documents, validation, built-in catalogs |
//! | [`filter`] | Search and sort over a product list |
//! | [`cart`] | Cart ledger operations |
//! | [`pricing`] | Totals, discounts, money formatting |
//! | [`session`] | One shopper's owned state and derived views |
//! | [`components`] | Text receipt building blocks |
//! | [`receipt`] | Checkout receipt layout |
//! | [`config`] | Environment and CLI configuration |
//! | [`server`] | Local HTTP JSON API |
//! | [`error`] | Error types |

pub mod cart;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod filter;
pub mod pricing;
pub mod receipt;
pub mod server;
pub mod session;

// Re-exports for convenience
pub use catalog::CatalogStore;
pub use error::StorefrontError;
pub use session::Session;
