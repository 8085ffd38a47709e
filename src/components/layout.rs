//! # Layout Components
//!
//! Divider and Spacer.

use super::{Alignment, Component, Layout};

/// Divider line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerStyle {
    /// Dashed line: `--------`
    #[default]
    Dashed,
    /// Equals line: `========`
    Equals,
}

/// A horizontal divider spanning the full receipt width.
///
/// ## Example
///
/// ```
/// use storefront::components::{ComponentExt, Divider};
///
/// assert_eq!(Divider::dashed().render(4), "----\n");
/// assert_eq!(Divider::equals().render(4), "====\n");
/// ```
pub struct Divider {
    style: DividerStyle,
}

impl Divider {
    pub fn new(style: DividerStyle) -> Self {
        Self { style }
    }

    pub fn dashed() -> Self {
        Self::new(DividerStyle::Dashed)
    }

    pub fn equals() -> Self {
        Self::new(DividerStyle::Equals)
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::dashed()
    }
}

impl Component for Divider {
    fn emit(&self, layout: &mut Layout) {
        let ch = match self.style {
            DividerStyle::Dashed => "-",
            DividerStyle::Equals => "=",
        };
        let line = ch.repeat(layout.width());
        layout.push(&line, Alignment::Left);
    }
}

/// Vertical whitespace, in blank lines.
pub struct Spacer {
    lines: usize,
}

impl Spacer {
    pub fn lines(lines: usize) -> Self {
        Self { lines }
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Self::lines(1)
    }
}

impl Component for Spacer {
    fn emit(&self, layout: &mut Layout) {
        for _ in 0..self.lines {
            layout.blank();
        }
    }
}
