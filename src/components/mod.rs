//! # Declarative Components
//!
//! Small building blocks for fixed-width text receipts.
//!
//! ## Design Philosophy
//!
//! Instead of formatting strings by hand, you describe *what* goes on the
//! receipt and let each component lay itself out for the target width:
//!
//! ```
//! use storefront::components::*;
//!
//! let receipt = Receipt::new()
//!     .child(Text::new("CORNER CAFE").center())
//!     .child(Divider::dashed())
//!     .child(LineItem::new("Latte x1", 4.00))
//!     .child(Total::new(4.00));
//!
//! let text = receipt.render(32);
//! assert!(text.contains("Latte x1"));
//! ```
//!
//! ## Component Trait
//!
//! All components implement the `Component` trait, which appends lines to a
//! [`Layout`]. Components can be nested (containers hold children).

mod layout;
mod receipt;
mod text;

pub use layout::*;
pub use receipt::*;
pub use text::*;

/// Line alignment within the receipt width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Output buffer for components: finished lines at a fixed character width.
#[derive(Debug, Clone)]
pub struct Layout {
    width: usize,
    lines: Vec<String>,
}

impl Layout {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
        }
    }

    /// Character width of the receipt.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Push one line, truncated to the width and aligned.
    pub fn push(&mut self, text: &str, align: Alignment) {
        let text = truncate(text, self.width);
        let len = text.chars().count();
        let pad = match align {
            Alignment::Left => 0,
            Alignment::Center => (self.width - len) / 2,
            Alignment::Right => self.width - len,
        };
        self.lines.push(format!("{}{}", " ".repeat(pad), text));
    }

    /// Push an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines, each terminated by a newline.
    pub fn into_string(self) -> String {
        let mut out = String::new();
        for line in self.lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Trait for declarative components.
pub trait Component {
    /// Append this component's lines to the layout.
    fn emit(&self, layout: &mut Layout);
}

/// Extension trait for rendering components.
pub trait ComponentExt: Component {
    /// Lay out at the given width.
    fn layout(&self, width: usize) -> Layout {
        let mut layout = Layout::new(width);
        self.emit(&mut layout);
        layout
    }

    /// Lay out and join into a single newline-terminated string.
    fn render(&self, width: usize) -> String {
        self.layout(width).into_string()
    }
}

// Blanket implementation for all components
impl<T: Component> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn emit(&self, layout: &mut Layout) {
        self.as_ref().emit(layout);
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, layout: &mut Layout) {
        (*self).emit(layout);
    }
}

/// Cut `text` to at most `max` characters.
pub(crate) fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Two-decimal amount without a currency symbol, never "-0.00".
pub(crate) fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}
