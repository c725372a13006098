//! Error types and input validation helpers
//!
//! Validation runs before any mutation: an operation either rejects its
//! input wholesale (every failing field reported at once) or reaches the
//! store with clean data.

use thiserror::Error;

use crate::store::StorageError;

// ── Text length limits ──────────────────────────────────────────────

/// Menu item and customer names
pub const MAX_NAME_LEN: usize = 100;

/// Menu categories
pub const MAX_CATEGORY_LEN: usize = 50;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Customer phones: exactly this many ASCII digits
pub const PHONE_LEN: usize = 10;

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Input rejected before any mutation was attempted
///
/// Carries every failing field so callers can surface all of them at
/// once instead of fixing one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Validation failed: {}", list_fields(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn list_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error for a single failing field
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add(field, message);
        err
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when some recorded failure is for the given field
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when nothing failed, `Err(self)` otherwise
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

// ── Validation helpers ──────────────────────────────────────────────

/// Record a failure unless `value` is non-empty after trimming and within
/// the length limit
pub fn require_text(
    value: &str,
    field: &'static str,
    max_len: usize,
    errors: &mut ValidationError,
) {
    if value.trim().is_empty() {
        errors.add(field, format!("{field} must not be empty"));
    } else if value.len() > max_len {
        errors.add(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        );
    }
}

/// Record a failure unless `value` is exactly ten ASCII digits
pub fn require_phone(value: &str, errors: &mut ValidationError) {
    if value.len() != PHONE_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
        errors.add("phone", format!("phone must be exactly {PHONE_LEN} digits"));
    }
}

/// Crate-level error for operations that validate and then hit storage
#[derive(Debug, Error)]
pub enum PosError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type PosResult<T> = Result<T, PosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_multiple_fields() {
        let mut errors = ValidationError::new();
        require_text("", "name", MAX_NAME_LEN, &mut errors);
        require_phone("12345", &mut errors);
        assert_eq!(errors.errors.len(), 2);
        assert!(errors.has_field("name"));
        assert!(errors.has_field("phone"));
        assert!(errors.clone().into_result().is_err());
    }

    #[test]
    fn empty_set_is_ok() {
        let mut errors = ValidationError::new();
        require_text("Veg Burger", "name", MAX_NAME_LEN, &mut errors);
        require_phone("9876543210", &mut errors);
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn whitespace_only_text_is_empty() {
        let mut errors = ValidationError::new();
        require_text("   ", "category", MAX_CATEGORY_LEN, &mut errors);
        assert!(errors.has_field("category"));
    }

    #[test]
    fn overlong_text_rejected() {
        let mut errors = ValidationError::new();
        require_text(&"x".repeat(MAX_NAME_LEN + 1), "name", MAX_NAME_LEN, &mut errors);
        assert!(errors.has_field("name"));
    }

    #[test]
    fn phone_must_be_ten_digits() {
        for bad in ["123456789", "12345678901", "98765x3210", "", "98765 3210"] {
            let mut errors = ValidationError::new();
            require_phone(bad, &mut errors);
            assert!(errors.has_field("phone"), "{bad:?} should fail");
        }
    }

    #[test]
    fn display_names_every_field() {
        let mut errors = ValidationError::new();
        errors.add("name", "name must not be empty");
        errors.add("price", "price must be positive, got 0");
        let text = errors.to_string();
        assert!(text.contains("name must not be empty"));
        assert!(text.contains("price must be positive"));
    }
}
