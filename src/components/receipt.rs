//! # Receipt Component
//!
//! The root container for building receipts.

use super::{Component, Layout};

/// Receipt is the root container component.
///
/// ## Example
///
/// ```
/// use storefront::components::*;
///
/// let receipt = Receipt::new()
///     .child(Text::new("STORE NAME").center())
///     .child(Divider::dashed())
///     .child(LineItem::new("Item", 9.99))
///     .child(Total::new(9.99));
///
/// let text = receipt.render(24);
/// assert_eq!(text.lines().count(), 4);
/// ```
pub struct Receipt {
    children: Vec<Box<dyn Component>>,
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

impl Receipt {
    /// Create a new empty receipt.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Add a child component.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Add multiple child components.
    pub fn children<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for c in components {
            self.children.push(Box::new(c));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Receipt {
    fn emit(&self, layout: &mut Layout) {
        for child in &self.children {
            child.emit(layout);
        }
    }
}
