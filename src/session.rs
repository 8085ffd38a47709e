//! # Session
//!
//! One shopper's in-memory state: browse controls, cart and discount panel.
//!
//! Mutations go through `&mut Session`; derived values (visible products,
//! totals) are recomputed from current state on every read, so the view layer
//! always sees values consistent with the last mutation.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::cart::{CartLedger, CartLineItem};
use crate::catalog::{CatalogStore, Category, Product};
use crate::error::StorefrontError;
use crate::filter::{SortKey, filter_and_sort};
use crate::pricing::{DiscountPanel, Totals, line_total};

/// State owned by a single active session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    catalog: Arc<CatalogStore>,
    selected_category: String,
    search_term: String,
    sort: SortKey,
    cart: CartLedger,
    discount: DiscountPanel,
}

impl Session {
    /// Start a session with an empty cart, browsing the first category.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        let selected_category = catalog.first_category_id().unwrap_or_default().to_string();
        let id = Uuid::new_v4();
        tracing::info!(session = %id, category = %selected_category, "session started");
        Self {
            id,
            catalog,
            selected_category,
            search_term: String::new(),
            sort: SortKey::default(),
            cart: CartLedger::new(),
            discount: DiscountPanel::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    // ------------------------------------------------------------------
    // Browse controls
    // ------------------------------------------------------------------

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Switch category. Unknown ids are kept and simply show no products.
    pub fn select_category(&mut self, category_id: &str) {
        tracing::debug!(category = category_id, "browse: select category");
        self.selected_category = category_id.to_string();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search(&mut self, term: &str) {
        tracing::debug!(term, "browse: search");
        self.search_term = term.to_string();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        tracing::debug!(%sort, "browse: sort");
        self.sort = sort;
    }

    /// The current category, if the selection names one.
    pub fn current_category(&self) -> Option<&Category> {
        self.catalog.category(&self.selected_category)
    }

    /// Products of the selected category after search and sort.
    pub fn visible_products(&self) -> Vec<Product> {
        filter_and_sort(
            self.catalog.products_for_category(&self.selected_category),
            &self.search_term,
            self.sort,
        )
    }

    /// Whether any cart line holds this product.
    pub fn is_in_cart(&self, product_id: &str) -> bool {
        self.cart.contains_product(product_id)
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartLedger {
        &mut self.cart
    }

    /// Add a catalog product by id as a new cart line.
    pub fn add_product(&mut self, product_id: &str) -> Result<(), StorefrontError> {
        let product = self
            .catalog
            .product(product_id)
            .ok_or_else(|| StorefrontError::UnknownProduct(product_id.to_string()))?;
        self.cart.add_item(product);
        Ok(())
    }

    /// Product card action: remove the product's lines if it is in the cart,
    /// otherwise add it.
    pub fn toggle_product(&mut self, product_id: &str) -> Result<(), StorefrontError> {
        if self.is_in_cart(product_id) {
            self.cart.remove_product(product_id);
            Ok(())
        } else {
            self.add_product(product_id)
        }
    }

    // ------------------------------------------------------------------
    // Summary
    // ------------------------------------------------------------------

    pub fn discount_panel(&self) -> &DiscountPanel {
        &self.discount
    }

    pub fn discount_panel_mut(&mut self) -> &mut DiscountPanel {
        &mut self.discount
    }

    pub fn totals(&self) -> Totals {
        Totals::compute(&self.cart, &self.discount.discount())
    }

    /// Cart lines with their line totals, plus summary figures.
    pub fn cart_view(&self) -> CartView<'_> {
        CartView {
            session: self.id,
            lines: self
                .cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartLineView {
                    index,
                    line_total: line_total(item),
                    item,
                })
                .collect(),
            totals: self.totals(),
            discount: &self.discount,
        }
    }

    /// Empty the cart and reset the discount panel.
    pub fn reset(&mut self) {
        tracing::info!(session = %self.id, "session reset");
        self.cart.clear();
        self.discount = DiscountPanel::new();
    }
}

/// Serializable snapshot of the cart side of a session.
#[derive(Debug, Serialize)]
pub struct CartView<'a> {
    pub session: Uuid,
    pub lines: Vec<CartLineView<'a>>,
    pub totals: Totals,
    pub discount: &'a DiscountPanel,
}

#[derive(Debug, Serialize)]
pub struct CartLineView<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub item: &'a CartLineItem,
    pub line_total: f64,
}
