//! Order Model

use serde::{Deserialize, Serialize};

/// Fulfilment channel for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderType {
    #[default]
    Takeaway,
    Delivery,
}

impl OrderType {
    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Takeaway => "Takeaway",
            OrderType::Delivery => "Delivery",
        }
    }
}

/// One order line, frozen at confirmation time
///
/// `name_at_order` and `price_at_order` are copies of the menu item as
/// it looked when the line entered the draft. Later menu edits do not
/// touch them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item_id: String,
    pub name_at_order: String,
    pub price_at_order: f64,
    /// Always >= 1 in a confirmed order
    pub quantity: i32,
}

/// A confirmed, immutable order
///
/// Customer fields are snapshots taken at confirmation; later directory
/// updates leave them untouched. `id` doubles as the invoice number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub order_type: OrderType,
    pub items: Vec<OrderItem>,
    /// Sum of line subtotals, computed once at confirmation
    pub total_amount: f64,
    /// Unix milliseconds
    pub created_at: i64,
}
