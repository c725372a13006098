//! Random record identifiers
//!
//! Every stored record (menu item, customer, order) gets a canonical
//! hyphenated v4 UUID string; order ids double as invoice numbers.
//! Collision odds are negligible at single-location scale, and nothing
//! here enforces global uniqueness.

use uuid::Uuid;

/// Fresh record identifier
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_layout() {
        let id = new_record_id();
        assert_eq!(id.len(), 36);
        let chars: Vec<char> = id.chars().collect();
        for pos in [8, 13, 18, 23] {
            assert_eq!(chars[pos], '-', "hyphen expected at {pos} in {id}");
        }
        // Version nibble is always 4
        assert_eq!(chars[14], '4');
        // Variant nibble is 8, 9, a or b
        assert!(matches!(chars[19], '8' | '9' | 'a' | 'b'), "bad variant in {id}");
        assert!(
            id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()),
            "non-hex character in {id}"
        );
        assert_eq!(id, id.to_lowercase());
    }

    #[test]
    fn practically_unique() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(new_record_id()));
        }
    }
}
