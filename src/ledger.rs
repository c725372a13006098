//! Append-only order ledger

use crate::draft::OrderDraft;
use crate::error::{PosResult, ValidationError};
use crate::ids;
use crate::models::{Customer, Order};
use crate::money;
use crate::store::RecordStore;
use crate::util;

/// Confirmed orders over the record store
///
/// Strictly append-only: no update, no delete, no status transitions.
/// Each order freezes the customer details and item prices it was
/// confirmed with.
#[derive(Clone)]
pub struct OrderLedger {
    store: RecordStore,
}

impl OrderLedger {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Every order, stored (insertion) order
    pub fn list_all(&self) -> Vec<Order> {
        self.store.read()
    }

    /// Orders for a phone number, newest first
    ///
    /// Matches the denormalized `customer_phone` snapshot, so history
    /// follows the phone even across customer renames. Equal timestamps
    /// keep their stored relative order (stable sort).
    pub fn list_by_phone(&self, phone: &str) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .list_all()
            .into_iter()
            .filter(|o| o.customer_phone == phone)
            .collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.created_at));
        orders
    }

    /// Persist a draft as a confirmed order for the given customer
    ///
    /// The draft is re-checked before anything is written: a non-empty
    /// line list, quantities within `1..=MAX_QUANTITY`, prices finite,
    /// non-negative and at most `MAX_PRICE`. The total is computed once
    /// here from the drafted snapshots; menu prices are not re-fetched.
    /// Returns the order exactly as stored.
    pub fn confirm(&self, draft: &OrderDraft, customer: &Customer) -> PosResult<Order> {
        validate_draft_items(draft)?;

        let order = Order {
            id: ids::new_record_id(),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            customer_phone: customer.phone.clone(),
            customer_address: customer.address.clone(),
            order_type: draft.order_type(),
            items: draft.items().to_vec(),
            total_amount: money::order_total(draft.items()),
            created_at: util::now_millis(),
        };

        let mut orders = self.list_all();
        orders.push(order.clone());
        self.store.write(&orders)?;

        tracing::info!(
            order_id = %order.id,
            customer_id = %order.customer_id,
            total = order.total_amount,
            "Order confirmed"
        );
        Ok(order)
    }
}

/// Last line of defense before an order reaches the ledger
fn validate_draft_items(draft: &OrderDraft) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();
    if draft.is_empty() {
        errors.add("items", "order must contain at least one item");
    }
    for line in draft.items() {
        if line.quantity < 1 {
            errors.add(
                "items",
                format!(
                    "quantity must be positive, got {} for {}",
                    line.quantity, line.name_at_order
                ),
            );
        } else if line.quantity > money::MAX_QUANTITY {
            errors.add(
                "items",
                format!(
                    "quantity exceeds maximum allowed ({}), got {} for {}",
                    money::MAX_QUANTITY, line.quantity, line.name_at_order
                ),
            );
        }
        if money::require_finite(line.price_at_order, "items").is_err() || line.price_at_order < 0.0
        {
            errors.add(
                "items",
                format!(
                    "price must be a finite non-negative number, got {} for {}",
                    line.price_at_order, line.name_at_order
                ),
            );
        } else if line.price_at_order > money::MAX_PRICE {
            errors.add(
                "items",
                format!(
                    "price exceeds maximum allowed ({}), got {} for {}",
                    money::MAX_PRICE, line.price_at_order, line.name_at_order
                ),
            );
        }
    }
    errors.into_result()
}
