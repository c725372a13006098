//! Store Info Model

use serde::{Deserialize, Serialize};

/// Restaurant identity printed on invoice headers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "Indirapuram Quick Bites".to_string(),
            address: "273-FF, Shakti Khand IV, Indirapuram".to_string(),
            phone: "9599256330".to_string(),
        }
    }
}
