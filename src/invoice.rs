//! Plain-text invoice rendering
//!
//! Produces a fixed-width layout suitable for terminal display or a
//! text-mode receipt printer. Widths are counted in chars, one column
//! per char.

use crate::models::{Order, OrderType, StoreInfo};
use crate::money;
use crate::util;

/// Default render width in characters
pub const INVOICE_WIDTH: usize = 48;

const COL_NO: usize = 4;
const COL_QTY: usize = 4;
const COL_RATE: usize = 9;
const COL_AMOUNT: usize = 10;

/// Pad or truncate to an exact column width
fn pad(s: &str, width: usize, align_right: bool) -> String {
    let w = s.chars().count();
    if w >= width {
        s.chars().take(width).collect()
    } else if align_right {
        format!("{}{}", " ".repeat(width - w), s)
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

struct TextBuilder {
    buf: String,
    width: usize,
}

impl TextBuilder {
    fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    /// Push one line, clipped to the render width
    fn write_line(&mut self, text: &str) {
        if text.chars().count() > self.width {
            self.buf.extend(text.chars().take(self.width));
        } else {
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    fn blank_line(&mut self) {
        self.buf.push('\n');
    }

    fn text_center(&mut self, text: &str) {
        let w = text.chars().count();
        if w >= self.width {
            self.write_line(text);
        } else {
            let padding = " ".repeat((self.width - w) / 2);
            self.buf.push_str(&padding);
            self.write_line(text);
        }
    }

    /// Left and right text on one line, padded apart to the full width.
    /// Falls back to a single space between them when they do not fit;
    /// the line is then clipped like any other.
    fn line_lr(&mut self, left: &str, right: &str) {
        let lw = left.chars().count();
        let rw = right.chars().count();
        if lw + rw >= self.width {
            self.write_line(&format!("{left} {right}"));
        } else {
            let gap = " ".repeat(self.width - lw - rw);
            self.buf.push_str(left);
            self.buf.push_str(&gap);
            self.write_line(right);
        }
    }

    fn eq_sep(&mut self) {
        let line = "=".repeat(self.width);
        self.write_line(&line);
    }

    fn dash_sep(&mut self) {
        let line = "-".repeat(self.width);
        self.write_line(&line);
    }

    fn finalize(self) -> String {
        self.buf
    }
}

/// Renders one confirmed order as an invoice
pub struct InvoiceRenderer<'a> {
    order: &'a Order,
    store: &'a StoreInfo,
    width: usize,
}

impl<'a> InvoiceRenderer<'a> {
    pub fn new(order: &'a Order, store: &'a StoreInfo) -> Self {
        Self::with_width(order, store, INVOICE_WIDTH)
    }

    pub fn with_width(order: &'a Order, store: &'a StoreInfo, width: usize) -> Self {
        Self {
            order,
            store,
            width,
        }
    }

    pub fn render(&self) -> String {
        let mut b = TextBuilder::new(self.width);
        // Item name takes whatever the fixed columns leave over
        let name_width = self
            .width
            .saturating_sub(COL_NO + COL_QTY + COL_RATE + COL_AMOUNT)
            .max(8);

        b.text_center(&self.store.name);
        b.text_center(&self.store.address);
        b.text_center(&format!("Phone: {}", self.store.phone));
        b.blank_line();
        b.text_center("INVOICE");
        b.eq_sep();

        b.write_line(&format!("No: {}", self.order.id));
        b.line_lr(
            &format!("Date: {}", util::format_millis(self.order.created_at)),
            &format!("Type: {}", self.order.order_type.label()),
        );
        b.dash_sep();

        b.write_line(&format!("Customer: {}", self.order.customer_name));
        b.write_line(&format!("Phone:    {}", self.order.customer_phone));
        if self.order.order_type == OrderType::Delivery {
            b.write_line(&format!("Address:  {}", self.order.customer_address));
        }
        b.dash_sep();

        let header = format!(
            "{}{}{}{}{}",
            pad("NO", COL_NO, false),
            pad("QTY", COL_QTY, false),
            pad("ITEM", name_width, false),
            pad("RATE", COL_RATE, true),
            pad("AMOUNT", COL_AMOUNT, true),
        );
        b.write_line(&header);
        b.dash_sep();

        for (index, item) in self.order.items.iter().enumerate() {
            let amount = money::to_f64(money::line_subtotal(item));
            let row = format!(
                "{}{}{}{}{}",
                pad(&(index + 1).to_string(), COL_NO, false),
                pad(&item.quantity.to_string(), COL_QTY, false),
                pad(&item.name_at_order, name_width, false),
                pad(&format!("{:.2}", item.price_at_order), COL_RATE, true),
                pad(&format!("{amount:.2}"), COL_AMOUNT, true),
            );
            b.write_line(&row);
        }

        b.eq_sep();
        b.line_lr(
            "Total Amount:",
            &format!("Rs. {:.2}", self.order.total_amount),
        );
        b.eq_sep();
        b.blank_line();
        b.text_center("Thank you for your order!");

        b.finalize()
    }
}
