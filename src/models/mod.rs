//! Data models
//!
//! The three persisted collections (menu items, customers, orders) plus
//! the store identity printed on documents. Orders serialize their
//! multi-word fields in camelCase, matching the layout of the persisted
//! JSON and of data exported from older installations.

pub mod customer;
pub mod menu_item;
pub mod order;
pub mod store_info;

// Re-exports
pub use customer::*;
pub use menu_item::*;
pub use order::*;
pub use store_info::*;
