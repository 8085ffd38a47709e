//! # Pricing Engine
//!
//! Pure derivations over a [`CartLedger`]: line totals, subtotal, item count,
//! discount and grand total. Amounts are `f64` at full precision; rounding to
//! two decimals happens only in [`format_money`].
//!
//! ## Discount panel
//!
//! ```text
//!            toggle (value := 0)
//!   Hidden ─────────────────────▶ Visible ──┐ set_kind / set_value
//!      ▲                             │  ◀───┘
//!      └────── toggle (value := 0) ───┘
//! ```
//!
//! Switching kind keeps the value, which is then read under the new kind's
//! clamp rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::components::format_amount;

use crate::cart::{CartLedger, CartLineItem};

/// `price * quantity` plus every selected add-on's `price * quantity`.
pub fn line_total(item: &CartLineItem) -> f64 {
    let addons: f64 = item
        .selected_addons
        .iter()
        .map(|a| a.addon.price * f64::from(a.quantity))
        .sum();
    item.product.price * f64::from(item.quantity) + addons
}

/// Sum of all line totals; 0 for an empty ledger.
pub fn subtotal(ledger: &CartLedger) -> f64 {
    ledger.items().iter().map(line_total).sum()
}

/// Sum of line quantities (add-on quantities are not counted).
pub fn total_item_count(ledger: &CartLedger) -> u64 {
    ledger.items().iter().map(|i| u64::from(i.quantity)).sum()
}

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Currency amount off.
    #[default]
    Fixed,
    /// Percent of the subtotal off.
    Percentage,
}

impl FromStr for DiscountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(DiscountKind::Fixed),
            "percentage" | "percent" | "%" => Ok(DiscountKind::Percentage),
            other => Err(format!(
                "unknown discount kind '{}' (expected fixed or percentage)",
                other
            )),
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountKind::Fixed => f.write_str("fixed"),
            DiscountKind::Percentage => f.write_str("percentage"),
        }
    }
}

/// Discount settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Discount {
    pub enabled: bool,
    pub kind: DiscountKind,
    pub value: f64,
}

impl Discount {
    pub fn fixed(value: f64) -> Self {
        Self {
            enabled: true,
            kind: DiscountKind::Fixed,
            value,
        }
    }

    pub fn percentage(value: f64) -> Self {
        Self {
            enabled: true,
            kind: DiscountKind::Percentage,
            value,
        }
    }
}

/// Amount taken off `subtotal`, always within `[0, subtotal]`.
pub fn discount_amount(subtotal: f64, discount: &Discount) -> f64 {
    if !discount.enabled {
        return 0.0;
    }
    // NaN falls to 0 via f64::max
    let value = discount.value.max(0.0);
    let amount = match discount.kind {
        DiscountKind::Fixed => value,
        DiscountKind::Percentage => subtotal * value / 100.0,
    };
    amount.min(subtotal).max(0.0)
}

/// `subtotal - discount_amount`, never negative.
pub fn grand_total(subtotal: f64, discount: &Discount) -> f64 {
    subtotal - discount_amount(subtotal, discount)
}

/// Everything the cart summary displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub item_count: u64,
    pub subtotal: f64,
    pub discount: f64,
    pub grand_total: f64,
}

impl Totals {
    pub fn compute(ledger: &CartLedger, discount: &Discount) -> Self {
        let subtotal = subtotal(ledger);
        let discount = discount_amount(subtotal, discount);
        Self {
            item_count: total_item_count(ledger),
            subtotal,
            discount,
            grand_total: subtotal - discount,
        }
    }
}

/// Visibility of the discount controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Hidden,
    Visible,
}

/// Discount sub-view: the panel state plus the discount it edits.
///
/// The discount is enabled exactly while the panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DiscountPanel {
    state: PanelState,
    kind: DiscountKind,
    value: f64,
}

impl DiscountPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn kind(&self) -> DiscountKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Show or hide the panel. Either transition resets the value to zero.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            PanelState::Hidden => PanelState::Visible,
            PanelState::Visible => PanelState::Hidden,
        };
        self.value = 0.0;
        tracing::debug!(state = ?self.state, "discount: toggle");
    }

    /// Switch between fixed and percentage. The value carries over.
    pub fn set_kind(&mut self, kind: DiscountKind) {
        if self.state == PanelState::Visible {
            self.kind = kind;
            tracing::debug!(%kind, "discount: set kind");
        }
    }

    /// Set the value; negatives and NaN become 0.
    pub fn set_value(&mut self, value: f64) {
        if self.state == PanelState::Visible {
            self.value = if value.is_nan() { 0.0 } else { value.max(0.0) };
            tracing::debug!(value = self.value, "discount: set value");
        }
    }

    /// Set the value from raw user input; unparseable input becomes 0.
    pub fn set_value_input(&mut self, raw: &str) {
        self.set_value(raw.trim().parse::<f64>().unwrap_or(0.0));
    }

    /// The discount this panel currently applies.
    pub fn discount(&self) -> Discount {
        Discount {
            enabled: self.state == PanelState::Visible,
            kind: self.kind,
            value: self.value,
        }
    }
}

/// Display formatting for money: two decimals with a currency symbol.
pub fn format_money(amount: f64) -> String {
    format!("${}", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Addon, Product};

    fn product(id: &str, price: f64, addons: &[(&str, f64)]) -> Product {
        Product {
            id: id.into(),
            name: id.to_uppercase(),
            description: None,
            price,
            image: String::new(),
            addons: addons
                .iter()
                .map(|(id, price)| Addon {
                    id: (*id).into(),
                    name: id.to_uppercase(),
                    price: *price,
                })
                .collect(),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_ledger() {
        let cart = CartLedger::new();
        assert_eq!(subtotal(&cart), 0.0);
        assert_eq!(total_item_count(&cart), 0);
        let totals = Totals::compute(&cart, &Discount::fixed(5.0));
        assert_eq!(totals.discount, 0.0);
        assert_eq!(totals.grand_total, 0.0);
    }

    #[test]
    fn test_line_total_with_addons() {
        let mut cart = CartLedger::new();
        cart.add_item(&product("latte", 4.0, &[("shot", 1.0), ("oat", 0.5)]));
        cart.set_quantity(0, 2);
        cart.toggle_addon(0, "shot", 3);
        cart.toggle_addon(0, "oat", 1);
        // 4*2 + 1*3 + 0.5*1
        assert!(close(line_total(&cart.items()[0]), 11.5));
    }

    #[test]
    fn test_item_count_ignores_addons() {
        let mut cart = CartLedger::new();
        cart.add_item(&product("a", 1.0, &[("x", 1.0)]));
        cart.add_item(&product("b", 2.0, &[]));
        cart.set_quantity(0, 3);
        cart.toggle_addon(0, "x", 10);
        assert_eq!(total_item_count(&cart), 4);
    }

    #[test]
    fn test_zero_priced_cart_has_zero_subtotal() {
        let mut cart = CartLedger::new();
        cart.add_item(&product("free", 0.0, &[("gratis", 0.0)]));
        cart.toggle_addon(0, "gratis", 2);
        assert_eq!(subtotal(&cart), 0.0);
    }

    #[test]
    fn test_fixed_discount_clamps() {
        assert!(close(discount_amount(6.0, &Discount::fixed(10.0)), 6.0));
        assert!(close(discount_amount(6.0, &Discount::fixed(2.5)), 2.5));
        assert_eq!(discount_amount(6.0, &Discount::fixed(-3.0)), 0.0);
    }

    #[test]
    fn test_percentage_discount_clamps() {
        assert!(close(discount_amount(6.0, &Discount::percentage(50.0)), 3.0));
        assert!(close(discount_amount(6.0, &Discount::percentage(250.0)), 6.0));
        assert_eq!(discount_amount(6.0, &Discount::percentage(-10.0)), 0.0);
        assert_eq!(discount_amount(6.0, &Discount::percentage(f64::NAN)), 0.0);
    }

    #[test]
    fn test_disabled_discount() {
        let discount = Discount {
            enabled: false,
            kind: DiscountKind::Fixed,
            value: 3.0,
        };
        assert_eq!(discount_amount(10.0, &discount), 0.0);
        assert_eq!(grand_total(10.0, &discount), 10.0);
    }

    #[test]
    fn test_grand_total_bounded_by_subtotal() {
        let discounts = [
            Discount::default(),
            Discount::fixed(0.0),
            Discount::fixed(1.0),
            Discount::fixed(1e9),
            Discount::fixed(-5.0),
            Discount::percentage(0.0),
            Discount::percentage(33.3),
            Discount::percentage(100.0),
            Discount::percentage(1000.0),
        ];
        for subtotal in [0.0, 0.01, 6.0, 199.99] {
            for discount in &discounts {
                let total = grand_total(subtotal, discount);
                assert!(total <= subtotal, "{:?} on {}", discount, subtotal);
                assert!(total >= 0.0, "{:?} on {}", discount, subtotal);
            }
        }
    }

    #[test]
    fn test_latte_scenario() {
        let latte = product("p1", 4.0, &[("a1", 1.0)]);
        let mut cart = CartLedger::new();
        cart.add_item(&latte);
        assert_eq!(cart.len(), 1);
        assert!(close(subtotal(&cart), 4.0));

        cart.toggle_addon(0, "a1", 2);
        let sub = subtotal(&cart);
        assert!(close(sub, 6.0));

        let mut panel = DiscountPanel::new();
        panel.toggle();
        panel.set_value(10.0);
        assert!(close(discount_amount(sub, &panel.discount()), 6.0));
        assert!(close(grand_total(sub, &panel.discount()), 0.0));

        panel.set_kind(DiscountKind::Percentage);
        panel.set_value(50.0);
        assert!(close(discount_amount(sub, &panel.discount()), 3.0));
        assert!(close(grand_total(sub, &panel.discount()), 3.0));
    }

    #[test]
    fn test_panel_toggle_resets_value_keeps_kind() {
        let mut panel = DiscountPanel::new();
        assert_eq!(panel.state(), PanelState::Hidden);
        assert!(!panel.discount().enabled);

        panel.toggle();
        panel.set_kind(DiscountKind::Percentage);
        panel.set_value(20.0);
        assert_eq!(panel.state(), PanelState::Visible);
        assert!(panel.discount().enabled);

        panel.toggle();
        assert_eq!(panel.state(), PanelState::Hidden);
        assert!(!panel.discount().enabled);
        assert_eq!(panel.value(), 0.0);

        panel.toggle();
        assert_eq!(panel.value(), 0.0);
        assert_eq!(panel.kind(), DiscountKind::Percentage);
    }

    #[test]
    fn test_panel_kind_switch_keeps_value() {
        let mut panel = DiscountPanel::new();
        panel.toggle();
        panel.set_value(8.0);
        panel.set_kind(DiscountKind::Percentage);
        assert_eq!(panel.value(), 8.0);
        assert!(close(discount_amount(50.0, &panel.discount()), 4.0));
    }

    #[test]
    fn test_panel_ignores_edits_while_hidden() {
        let mut panel = DiscountPanel::new();
        panel.set_value(5.0);
        panel.set_kind(DiscountKind::Percentage);
        assert_eq!(panel.value(), 0.0);
        assert_eq!(panel.kind(), DiscountKind::Fixed);
    }

    #[test]
    fn test_panel_value_input() {
        let mut panel = DiscountPanel::new();
        panel.toggle();
        panel.set_value_input("12.5");
        assert_eq!(panel.value(), 12.5);
        panel.set_value_input("twelve");
        assert_eq!(panel.value(), 0.0);
        panel.set_value_input("-4");
        assert_eq!(panel.value(), 0.0);
    }

    #[test]
    fn test_discount_kind_parsing() {
        assert_eq!("fixed".parse::<DiscountKind>(), Ok(DiscountKind::Fixed));
        assert_eq!(
            "Percentage".parse::<DiscountKind>(),
            Ok(DiscountKind::Percentage)
        );
        assert!("bogo".parse::<DiscountKind>().is_err());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(6.0), "$6.00");
        assert_eq!(format_money(0.1 + 0.2), "$0.30");
        assert_eq!(format_money(-0.0000001), "$0.00");
        assert_eq!(format_money(19.999), "$20.00");
        assert_eq!(format_money(-1.25), format!("${}", format_amount(-1.25)));
    }
}
