//! In-memory order building

use crate::models::{MenuItem, OrderItem, OrderType};
use crate::money;

/// An order being composed, not yet persisted
///
/// Lines snapshot the menu item's name and price as they are added, so
/// the draft survives later menu edits unchanged. A quantity dropping to
/// zero removes its line; the draft never holds zero-quantity lines.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    order_type: OrderType,
    items: Vec<OrderItem>,
}

impl OrderDraft {
    pub fn new(order_type: OrderType) -> Self {
        Self {
            order_type,
            items: Vec::new(),
        }
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
    }

    /// Add one unit of a menu item, merging into an existing line
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.items.iter_mut().find(|l| l.menu_item_id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.items.push(OrderItem {
            menu_item_id: item.id.clone(),
            name_at_order: item.name.clone(),
            price_at_order: item.price,
            quantity: 1,
        });
    }

    /// Nudge a line's quantity by `delta`, clamping at zero (which drops
    /// the line); unknown ids are ignored
    pub fn adjust_quantity(&mut self, menu_item_id: &str, delta: i32) {
        if let Some(line) = self.items.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
            line.quantity = line.quantity.saturating_add(delta).max(0);
        }
        self.items.retain(|l| l.quantity > 0);
    }

    /// Set a line's quantity outright; zero or less drops the line
    pub fn set_quantity(&mut self, menu_item_id: &str, quantity: i32) {
        if let Some(line) = self.items.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
            line.quantity = quantity;
        }
        self.items.retain(|l| l.quantity > 0);
    }

    /// Drop a line entirely
    pub fn remove_item(&mut self, menu_item_id: &str) {
        self.items.retain(|l| l.menu_item_id != menu_item_id);
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Running bill preview
    pub fn total(&self) -> f64 {
        money::order_total(&self.items)
    }
}
