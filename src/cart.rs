//! # Cart Ledger
//!
//! Ordered list of cart line-items. A line-item is addressed by its position,
//! so adding the same product twice yields two independent lines.
//!
//! Every operation is total: an out-of-range index or an unknown add-on id
//! leaves the ledger unchanged, and quantities below 1 are clamped up to 1.
//!
//! ## Example
//!
//! ```
//! use storefront::cart::CartLedger;
//! use storefront::catalog::{Addon, Product};
//!
//! let latte = Product {
//!     id: "p1".into(),
//!     name: "Latte".into(),
//!     description: None,
//!     price: 4.0,
//!     image: "☕".into(),
//!     addons: vec![Addon { id: "a1".into(), name: "Extra Shot".into(), price: 1.0 }],
//! };
//!
//! let mut cart = CartLedger::new();
//! cart.add_item(&latte);
//! cart.toggle_addon(0, "a1", 2);
//! cart.set_quantity(0, 0); // clamped to 1
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.items()[0].quantity, 1);
//! assert_eq!(cart.addon_quantity(0, "a1"), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{Addon, Product};

/// An add-on chosen for a line-item, with its own quantity (>= 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedAddon {
    #[serde(flatten)]
    pub addon: Addon,
    pub quantity: u32,
}

/// One entry in the cart: a copy of the product plus quantity and add-ons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
    /// At most one entry per add-on id.
    pub selected_addons: Vec<SelectedAddon>,
}

impl CartLineItem {
    fn new(product: &Product) -> Self {
        Self {
            product: product.clone(),
            quantity: 1,
            selected_addons: Vec::new(),
        }
    }

    /// Selected quantity of an add-on, or 0 when it is not selected.
    pub fn addon_quantity(&self, addon_id: &str) -> u32 {
        self.selected_addons
            .iter()
            .find(|a| a.addon.id == addon_id)
            .map(|a| a.quantity)
            .unwrap_or(0)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartLedger {
    items: Vec<CartLineItem>,
}

impl CartLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Line-items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new line-item with quantity 1 and no add-ons.
    ///
    /// Never merges with an existing line for the same product.
    pub fn add_item(&mut self, product: &Product) {
        self.items.push(CartLineItem::new(product));
        tracing::debug!(product = %product.id, lines = self.items.len(), "cart: add item");
    }

    /// Remove the line-item at `index`. Out-of-range indices are ignored.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            let removed = self.items.remove(index);
            tracing::debug!(index, product = %removed.product.id, "cart: remove item");
        } else {
            tracing::debug!(index, lines = self.items.len(), "cart: remove out of range, ignored");
        }
    }

    /// Remove every line-item for `product_id`.
    pub fn remove_product(&mut self, product_id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != product_id);
        tracing::debug!(
            product = product_id,
            removed = before - self.items.len(),
            "cart: remove product"
        );
    }

    /// Whether any line-item holds `product_id`.
    pub fn contains_product(&self, product_id: &str) -> bool {
        self.items.iter().any(|item| item.product.id == product_id)
    }

    /// Set a line's quantity, clamping anything below 1 up to 1.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) {
        let Some(item) = self.items.get_mut(index) else {
            tracing::debug!(index, "cart: set quantity out of range, ignored");
            return;
        };
        item.quantity = clamp_quantity(quantity);
        tracing::debug!(index, quantity = item.quantity, "cart: set quantity");
    }

    /// Set a line's quantity from raw user input.
    ///
    /// The leading integer is used (`"3"`, `" 4 items"`, `"2.9"` -> 2);
    /// input with no leading integer clamps to 1.
    pub fn set_quantity_input(&mut self, index: usize, raw: &str) {
        self.set_quantity(index, parse_leading_int(raw).unwrap_or(1));
    }

    /// Stepper "+": add one to a line's quantity.
    pub fn increment(&mut self, index: usize) {
        if let Some(item) = self.items.get(index) {
            let next = i64::from(item.quantity) + 1;
            self.set_quantity(index, next);
        }
    }

    /// Stepper "-": subtract one, never going below 1.
    pub fn decrement(&mut self, index: usize) {
        if let Some(item) = self.items.get(index) {
            let next = i64::from(item.quantity) - 1;
            self.set_quantity(index, next);
        }
    }

    /// Select, re-quantify or deselect an add-on on a line-item.
    ///
    /// A positive `quantity` replaces any existing selection of `addon_id`
    /// (the fresh entry goes to the end). The add-on is looked up in the
    /// line's own product add-ons; unknown ids are ignored. A quantity of 0
    /// or less deselects it.
    pub fn toggle_addon(&mut self, index: usize, addon_id: &str, quantity: i64) {
        let Some(item) = self.items.get_mut(index) else {
            tracing::debug!(index, addon = addon_id, "cart: toggle addon out of range, ignored");
            return;
        };

        if quantity > 0 {
            let Some(addon) = item.product.addon(addon_id).cloned() else {
                tracing::debug!(index, addon = addon_id, "cart: unknown addon, ignored");
                return;
            };
            item.selected_addons.retain(|a| a.addon.id != addon_id);
            item.selected_addons.push(SelectedAddon {
                addon,
                quantity: clamp_quantity(quantity),
            });
        } else {
            item.selected_addons.retain(|a| a.addon.id != addon_id);
        }
        tracing::debug!(index, addon = addon_id, quantity, "cart: toggle addon");
    }

    /// Selected quantity of an add-on on a line, 0 if unselected or out of range.
    pub fn addon_quantity(&self, index: usize, addon_id: &str) -> u32 {
        self.items
            .get(index)
            .map(|item| item.addon_quantity(addon_id))
            .unwrap_or(0)
    }

    /// Empty the ledger.
    pub fn clear(&mut self) {
        tracing::debug!(lines = self.items.len(), "cart: clear");
        self.items.clear();
    }
}

fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}

/// Parse an optional sign followed by leading digits, ignoring the rest.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Overlong digit runs saturate instead of failing.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
