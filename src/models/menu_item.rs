//! Menu Item Model

use serde::{Deserialize, Serialize};

/// A sellable menu entry
///
/// Orders copy `name` and `price` into their own lines at confirmation,
/// so editing or removing a menu item never rewrites order history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Unit price; positive and finite, enforced at the catalog boundary
    pub price: f64,
    pub category: String,
}
