//! Menu catalog maintenance

use crate::error::{MAX_CATEGORY_LEN, MAX_NAME_LEN, PosResult, ValidationError, require_text};
use crate::ids;
use crate::models::MenuItem;
use crate::money;
use crate::store::RecordStore;

/// Menu catalog over the record store
///
/// Edits never touch order history: confirmed orders carry their own
/// name/price snapshots.
#[derive(Clone)]
pub struct MenuCatalog {
    store: RecordStore,
}

impl MenuCatalog {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Current menu (the launch menu until a first edit is persisted)
    pub fn list(&self) -> Vec<MenuItem> {
        self.store.read()
    }

    /// Validate and append a new item, returning it with its fresh id
    ///
    /// Name and category are stored trimmed. Nothing is written when any
    /// field fails.
    pub fn add(&self, name: &str, price: f64, category: &str) -> PosResult<MenuItem> {
        let mut errors = ValidationError::new();
        require_text(name, "name", MAX_NAME_LEN, &mut errors);
        require_text(category, "category", MAX_CATEGORY_LEN, &mut errors);
        if !price.is_finite() {
            errors.add("price", format!("price must be a finite number, got {price}"));
        } else if price <= 0.0 {
            errors.add("price", format!("price must be positive, got {price}"));
        } else if price > money::MAX_PRICE {
            errors.add(
                "price",
                format!("price exceeds maximum allowed ({}), got {price}", money::MAX_PRICE),
            );
        }
        errors.into_result()?;

        let item = MenuItem {
            id: ids::new_record_id(),
            name: name.trim().to_string(),
            price,
            category: category.trim().to_string(),
        };

        let mut items = self.list();
        items.push(item.clone());
        self.store.write(&items)?;

        tracing::debug!(item_id = %item.id, name = %item.name, "Menu item added");
        Ok(item)
    }

    /// Remove an item by id; an absent id is a silent no-op
    pub fn remove(&self, id: &str) -> PosResult<()> {
        let mut items = self.list();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(());
        }
        self.store.write(&items)?;

        tracing::debug!(item_id = %id, "Menu item removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    fn catalog() -> MenuCatalog {
        MenuCatalog::new(RecordStore::open_in_memory().unwrap())
    }

    #[test]
    fn add_appends_to_the_seeded_menu() {
        let catalog = catalog();
        let item = catalog.add("Veg Pizza", 150.0, "Mains").unwrap();
        assert_eq!(item.name, "Veg Pizza");
        assert_eq!(item.price, 150.0);
        assert_eq!(item.id.len(), 36);

        let menu = catalog.list();
        assert_eq!(menu.len(), 16);
        assert_eq!(menu[15].id, item.id);
    }

    #[test]
    fn add_trims_name_and_category() {
        let catalog = catalog();
        let item = catalog.add("  Veg Pizza  ", 150.0, "  Mains ").unwrap();
        assert_eq!(item.name, "Veg Pizza");
        assert_eq!(item.category, "Mains");

        let stored = catalog.list().pop().unwrap();
        assert_eq!(stored.name, "Veg Pizza");
    }

    #[test]
    fn add_rejects_bad_fields_and_writes_nothing() {
        let catalog = catalog();

        let err = match catalog.add("  ", 0.0, "") {
            Err(crate::error::PosError::Validation(err)) => err,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert!(err.has_field("name"));
        assert!(err.has_field("price"));
        assert!(err.has_field("category"));

        assert_eq!(catalog.list().len(), 15);
    }

    #[test]
    fn add_rejects_negative_and_non_finite_prices() {
        let catalog = catalog();
        assert!(catalog.add("Soup", -5.0, "Starters").is_err());
        assert!(catalog.add("Soup", f64::NAN, "Starters").is_err());
        assert!(catalog.add("Soup", f64::INFINITY, "Starters").is_err());
        assert_eq!(catalog.list().len(), 15);
    }

    #[test]
    fn add_rejects_prices_over_the_maximum() {
        let catalog = catalog();

        let err = match catalog.add("Gold Leaf Dosa", 1e30, "Specials") {
            Err(crate::error::PosError::Validation(err)) => err,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert!(err.has_field("price"));
        assert!(catalog.add("Gold Leaf Dosa", money::MAX_PRICE + 1.0, "Specials").is_err());
        assert_eq!(catalog.list().len(), 15);

        // The ceiling itself is still a valid price
        catalog.add("Gold Leaf Dosa", money::MAX_PRICE, "Specials").unwrap();
        assert_eq!(catalog.list().len(), 16);
    }

    #[test]
    fn remove_deletes_the_matching_item() {
        let catalog = catalog();
        catalog.remove("m1").unwrap();

        let menu = catalog.list();
        assert_eq!(menu.len(), 14);
        assert!(!menu.iter().any(|item| item.id == "m1"));
    }

    #[test]
    fn remove_of_absent_id_is_a_noop() {
        let catalog = catalog();
        catalog.remove("no-such-id").unwrap();
        assert_eq!(catalog.list().len(), 15);
    }
}
