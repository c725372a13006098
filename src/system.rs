//! Top-level POS facade wiring the components over one store

use crate::catalog::MenuCatalog;
use crate::config::Config;
use crate::directory::CustomerDirectory;
use crate::draft::OrderDraft;
use crate::error::{MAX_NAME_LEN, PosResult, ValidationError, require_phone, require_text};
use crate::ledger::OrderLedger;
use crate::models::{Order, OrderType, StoreInfo};
use crate::store::{RecordStore, StorageResult};

/// One POS instance: menu, customers and orders over a single database
///
/// Cheap to clone; all clones share the same underlying store.
#[derive(Clone)]
pub struct PosSystem {
    store_info: StoreInfo,
    catalog: MenuCatalog,
    directory: CustomerDirectory,
    ledger: OrderLedger,
}

impl PosSystem {
    /// Open (or create) the database at the configured path
    pub fn open(config: &Config) -> StorageResult<Self> {
        let store = RecordStore::open(&config.db_path)?;
        Ok(Self::assemble(store, config.store_info.clone()))
    }

    /// Fully in-memory instance, nothing touches disk
    pub fn open_in_memory() -> StorageResult<Self> {
        let store = RecordStore::open_in_memory()?;
        Ok(Self::assemble(store, StoreInfo::default()))
    }

    fn assemble(store: RecordStore, store_info: StoreInfo) -> Self {
        Self {
            store_info,
            catalog: MenuCatalog::new(store.clone()),
            directory: CustomerDirectory::new(store.clone()),
            ledger: OrderLedger::new(store),
        }
    }

    pub fn store_info(&self) -> &StoreInfo {
        &self.store_info
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn directory(&self) -> &CustomerDirectory {
        &self.directory
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    /// Upsert the customer by phone, then confirm the draft against them
    ///
    /// All field problems are reported in one [`ValidationError`] before
    /// anything is written: missing name, malformed phone, an empty
    /// address on a delivery order, an empty draft.
    ///
    /// The customer upsert and the order append are separate commits. If
    /// the order write fails after the customer write, the customer
    /// update stands; a retry mints a fresh order id, so nothing is
    /// double-counted.
    pub fn place_order(
        &self,
        draft: &OrderDraft,
        customer_name: &str,
        customer_phone: &str,
        customer_address: &str,
    ) -> PosResult<Order> {
        let mut errors = ValidationError::new();
        require_text(customer_name, "name", MAX_NAME_LEN, &mut errors);
        require_phone(customer_phone, &mut errors);
        if draft.order_type() == OrderType::Delivery && customer_address.trim().is_empty() {
            errors.add("address", "address is required for delivery orders");
        }
        if draft.is_empty() {
            errors.add("items", "order must contain at least one item");
        }
        errors.into_result()?;

        let customer = self
            .directory
            .find_or_create_or_update(customer_name, customer_phone, customer_address)?;
        self.ledger.confirm(draft, &customer)
    }
}
