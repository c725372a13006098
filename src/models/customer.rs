//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer directory entry
///
/// `phone` is the natural key: the directory keeps at most one record
/// per phone value. `name` and `address` hold whatever the most recent
/// order supplied; earlier values are not kept anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    /// Exactly 10 ASCII digits
    pub phone: String,
    /// May be empty for walk-in customers
    pub address: String,
}
