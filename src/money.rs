//! Money arithmetic using rust_decimal for precision
//!
//! Prices and totals live as `f64` in the stored records; every
//! computation runs on `Decimal` and is rounded to 2 decimal places on
//! the way back out, so float drift never reaches a stored total.

use rust_decimal::prelude::*;

use crate::error::ValidationError;
use crate::models::OrderItem;

/// Monetary values round to 2 decimal places, half-up
const DECIMAL_PLACES: u32 = 2;

/// Maximum accepted price per item
///
/// Bounded inputs keep every subtotal inside `Decimal`'s range.
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum accepted quantity per order line
pub const MAX_QUANTITY: i32 = 9999;

/// Validate that an f64 monetary value is finite (not NaN, not Infinity)
#[inline]
pub fn require_finite(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::single(
            field,
            format!("{field} must be a finite number, got {value}"),
        ));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Inputs are checked with `require_finite` at the boundary. If a
/// non-finite value reaches here anyway, logs an error and returns ZERO
/// rather than corrupting a total.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // Decimal's whole range (~7.9e28) is well inside f64
        .expect("Decimal is always representable as f64")
}

/// Subtotal of one order line (`price_at_order` × `quantity`)
pub fn line_subtotal(item: &OrderItem) -> Decimal {
    to_decimal(item.price_at_order) * Decimal::from(item.quantity)
}

/// Total bill for a set of order lines, rounded for storage
pub fn order_total(items: &[OrderItem]) -> f64 {
    let total: Decimal = items.iter().map(line_subtotal).sum();
    to_f64(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: f64, quantity: i32) -> OrderItem {
        OrderItem {
            menu_item_id: "m1".to_string(),
            name_at_order: "Test Item".to_string(),
            price_at_order: price,
            quantity,
        }
    }

    #[test]
    fn round_trip_rounds_half_away_from_zero() {
        assert_eq!(to_f64(Decimal::new(2345, 3)), 2.35); // 2.345 -> 2.35
        assert_eq!(to_f64(Decimal::new(2344, 3)), 2.34);
        assert_eq!(to_f64(Decimal::new(-2345, 3)), -2.35);
    }

    #[test]
    fn non_finite_becomes_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn require_finite_rejects_nan_and_infinity() {
        assert!(require_finite(80.0, "price").is_ok());
        assert!(require_finite(f64::NAN, "price").unwrap_err().has_field("price"));
        assert!(require_finite(f64::NEG_INFINITY, "price").is_err());
    }

    #[test]
    fn total_avoids_float_drift() {
        // Naive f64 gives 1.1 * 3 = 3.3000000000000003
        assert_eq!(order_total(&[line(1.1, 3)]), 3.3);
        assert_eq!(order_total(&[line(0.1, 1), line(0.2, 1)]), 0.3);
    }

    #[test]
    fn total_sums_multiple_lines() {
        let items = [line(80.0, 2), line(40.0, 1), line(20.0, 3)];
        assert_eq!(order_total(&items), 260.0);
    }

    #[test]
    fn bounded_extremes_total_exactly() {
        assert_eq!(order_total(&[line(MAX_PRICE, MAX_QUANTITY)]), 9_999_000_000.0);
    }

    #[test]
    fn empty_lines_total_zero() {
        assert_eq!(order_total(&[]), 0.0);
    }
}
