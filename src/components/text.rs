//! # Text Components
//!
//! Text, Columns, LineItem and Total.

use super::{Alignment, Component, Layout, format_amount, truncate};

/// A single line of text.
///
/// ## Example
///
/// ```
/// use storefront::components::{ComponentExt, Text};
///
/// assert_eq!(Text::new("hi").center().render(6), "  hi\n");
/// ```
pub struct Text {
    content: String,
    align: Alignment,
}

impl Text {
    /// Create left-aligned text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            align: Alignment::Left,
        }
    }

    pub fn left(mut self) -> Self {
        self.align = Alignment::Left;
        self
    }

    pub fn center(mut self) -> Self {
        self.align = Alignment::Center;
        self
    }

    pub fn right(mut self) -> Self {
        self.align = Alignment::Right;
        self
    }
}

impl Component for Text {
    fn emit(&self, layout: &mut Layout) {
        layout.push(&self.content, self.align);
    }
}

/// Two columns: left text and right text, padded to the full width.
///
/// The left side is cut short when both don't fit.
pub struct Columns {
    left: String,
    right: String,
}

impl Columns {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl Component for Columns {
    fn emit(&self, layout: &mut Layout) {
        let width = layout.width();
        let right_len = self.right.chars().count();
        let left_max = width.saturating_sub(right_len + 1);
        let left = truncate(&self.left, left_max);
        let padding = width.saturating_sub(left.chars().count() + right_len);
        let line = format!("{}{}{}", left, " ".repeat(padding), self.right);
        layout.push(&line, Alignment::Left);
    }
}

/// A line item component (name on left, amount on right).
///
/// ## Example
///
/// ```
/// use storefront::components::{ComponentExt, LineItem};
///
/// assert_eq!(LineItem::new("Latte", 4.5).render(12), "Latte   4.50\n");
/// ```
pub struct LineItem {
    name: String,
    amount: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

impl Component for LineItem {
    fn emit(&self, layout: &mut Layout) {
        Columns::new(self.name.as_str(), format_amount(self.amount)).emit(layout);
    }
}

/// A total component (label and amount, right-aligned by default).
///
/// ## Example
///
/// ```
/// use storefront::components::Total;
///
/// let total = Total::new(19.99);
/// let custom = Total::labeled("SUBTOTAL:", 15.99);
/// ```
pub struct Total {
    label: String,
    amount: f64,
    right_align: bool,
}

impl Total {
    /// Create a new total with default "TOTAL:" label.
    pub fn new(amount: f64) -> Self {
        Self::labeled("TOTAL:", amount)
    }

    /// Create a total with a custom label.
    pub fn labeled(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
            right_align: true,
        }
    }

    /// Use left alignment instead of right.
    pub fn left(mut self) -> Self {
        self.right_align = false;
        self
    }
}

impl Component for Total {
    fn emit(&self, layout: &mut Layout) {
        // Format: "LABEL:  VALUE" with two spaces between
        let line = format!("{}  {}", self.label, format_amount(self.amount));
        let align = if self.right_align {
            Alignment::Right
        } else {
            Alignment::Left
        };
        layout.push(&line, align);
    }
}
