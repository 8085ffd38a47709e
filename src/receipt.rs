//! # Checkout Receipt
//!
//! Renders a session's cart and totals as a fixed-width text receipt, built
//! from the declarative [`components`](crate::components).

use chrono::Local;

use crate::components::{
    Columns, ComponentExt, Divider, LineItem, Receipt, Spacer, Text, Total,
};
use crate::pricing::{DiscountKind, PanelState};
use crate::session::Session;

/// Default character width (Font A on 58mm paper).
pub const DEFAULT_WIDTH: usize = 32;

/// Narrowest width the layout still reads correctly at.
pub const MIN_WIDTH: usize = 24;

/// Header information that varies per print.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptStamp {
    /// Human-readable print time.
    pub printed_at: String,
    /// Order reference printed under the timestamp.
    pub reference: String,
}

impl ReceiptStamp {
    /// Stamp with the local time and the session's short id.
    pub fn now(session: &Session) -> Self {
        let id = session.id().simple().to_string();
        Self {
            printed_at: current_datetime(),
            reference: id[..8].to_uppercase(),
        }
    }
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn current_datetime() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Build the receipt component tree for a session.
pub fn checkout_receipt(session: &Session, store_name: &str, stamp: &ReceiptStamp) -> Receipt {
    let mut receipt = Receipt::new()
        .child(Text::new(store_name.to_uppercase()).center())
        .child(Text::new(stamp.printed_at.as_str()).center())
        .child(Text::new(format!("ORDER {}", stamp.reference)).center())
        .child(Divider::dashed())
        .child(Columns::new("ITEM", "AMOUNT"))
        .child(Divider::dashed());

    if session.cart().is_empty() {
        receipt = receipt.child(Text::new("(no items)").center());
    }

    for item in session.cart().items() {
        receipt = receipt.child(LineItem::new(
            format!("{} x{}", item.product.name, item.quantity),
            item.product.price * f64::from(item.quantity),
        ));
        for selected in &item.selected_addons {
            receipt = receipt.child(LineItem::new(
                format!("  + {} x{}", selected.addon.name, selected.quantity),
                selected.addon.price * f64::from(selected.quantity),
            ));
        }
    }

    let totals = session.totals();
    let panel = session.discount_panel();
    receipt = receipt
        .child(Divider::dashed())
        .child(Total::labeled("SUBTOTAL:", totals.subtotal));

    if panel.state() == PanelState::Visible {
        let label = match panel.kind() {
            DiscountKind::Fixed => "DISCOUNT:".to_string(),
            DiscountKind::Percentage => format!("DISCOUNT ({}%):", panel.value()),
        };
        receipt = receipt.child(Total::labeled(label, -totals.discount));
    }

    receipt
        .child(Total::new(totals.grand_total))
        .child(Text::new(format!("ITEMS: {}", totals.item_count)))
        .child(Spacer::default())
        .child(Text::new("THANK YOU").center())
}

/// Render the checkout receipt to text.
pub fn render(session: &Session, store_name: &str, stamp: &ReceiptStamp, width: usize) -> String {
    checkout_receipt(session, store_name, stamp).render(width.max(MIN_WIDTH))
}
