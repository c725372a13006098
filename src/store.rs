//! redb-based persistence for the POS collections
//!
//! # Layout
//!
//! One table, `collections`, keyed by collection name, holding the whole
//! collection as a JSON-serialized array:
//!
//! | Key | Value | Seed when absent |
//! |-----|-------|------------------|
//! | `menu_items` | `Vec<MenuItem>` | the launch menu |
//! | `customers` | `Vec<Customer>` | empty |
//! | `orders` | `Vec<Order>` | empty |
//!
//! Writers replace a collection wholesale: read, modify in memory, write
//! back. A commit touches exactly one key, so a collection is never
//! observed half-written. Nothing spans two collections, and two
//! interleaved read-modify-write cycles lose one of the updates; one
//! logical writer is assumed.
//!
//! # Read fallback
//!
//! A failed or unparseable read degrades to the collection seed instead
//! of erroring: corrupt data is treated as absent so the POS keeps
//! serving, and the condition is logged at warn. Write failures always
//! propagate.

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{Customer, MenuItem, Order};

/// Table holding every collection: key = collection name, value = JSON array
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A record sequence persisted under a fixed key
pub trait Collection: Serialize + DeserializeOwned + Sized {
    /// Key of this collection inside the collections table
    const KEY: &'static str;

    /// Records served when nothing has been stored yet, or the stored
    /// value is unreadable
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

impl Collection for MenuItem {
    const KEY: &'static str = "menu_items";

    fn seed() -> Vec<Self> {
        default_menu()
    }
}

impl Collection for Customer {
    const KEY: &'static str = "customers";
}

impl Collection for Order {
    const KEY: &'static str = "orders";
}

/// Record store backed by redb
///
/// Cheap to clone; every component holds its own handle to the shared
/// database.
#[derive(Clone)]
pub struct RecordStore {
    db: Arc<Database>,
}

impl RecordStore {
    /// Open or create the database file at the given path
    ///
    /// redb commits with `Durability::Immediate`: once `write` returns,
    /// the data survives power loss, and copy-on-write with an atomic
    /// pointer swap keeps the file consistent through crashes.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory store
    ///
    /// Backs tests and ephemeral sessions; behaves exactly like a
    /// file-backed store minus durability.
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so reads never race its existence
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        tracing::info!("Record store opened");
        Ok(Self { db: Arc::new(db) })
    }

    /// Read a whole collection, falling back to its seed
    ///
    /// An absent key yields the seed (normal on first run, not logged).
    /// An unreadable or unparseable value also yields the seed, logged at
    /// warn: availability over visibility, by contract.
    pub fn read<C: Collection>(&self) -> Vec<C> {
        match self.try_read::<C>() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    collection = C::KEY,
                    error = %err,
                    "Unreadable collection, serving seed data"
                );
                C::seed()
            }
        }
    }

    fn try_read<C: Collection>(&self) -> StorageResult<Vec<C>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        match table.get(C::KEY)? {
            Some(value) => Ok(serde_json::from_slice(value.value())?),
            None => Ok(C::seed()),
        }
    }

    /// Replace a whole collection in one commit
    ///
    /// Serialization happens before the transaction starts, so a failure
    /// there leaves the stored value untouched.
    pub fn write<C: Collection>(&self, records: &[C]) -> StorageResult<()> {
        let value = serde_json::to_vec(records)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(C::KEY, value.as_slice())?;
        }
        write_txn.commit()?;

        tracing::debug!(
            collection = C::KEY,
            records = records.len(),
            "Collection written"
        );
        Ok(())
    }
}

/// The launch menu, served until a first catalog edit is persisted
pub fn default_menu() -> Vec<MenuItem> {
    [
        ("m1", "Veg Burger", 80.0, "Burgers"),
        ("m2", "Chicken Burger", 120.0, "Burgers"),
        ("m3", "Aloo Tikki Burger", 60.0, "Burgers"),
        ("m4", "Paneer Wrap", 100.0, "Wraps"),
        ("m5", "Chicken Shawarma", 150.0, "Wraps"),
        ("m6", "French Fries (M)", 70.0, "Sides"),
        ("m7", "French Fries (L)", 100.0, "Sides"),
        ("m8", "Chilli Garlic Potato Pops", 90.0, "Sides"),
        ("m9", "Veg Hakka Noodles", 130.0, "Noodles"),
        ("m10", "Chicken Hakka Noodles", 160.0, "Noodles"),
        ("m11", "Veg Spring Roll", 100.0, "Starters"),
        ("m12", "Chicken Spring Roll", 130.0, "Starters"),
        ("m13", "Coca-Cola (500ml)", 40.0, "Beverages"),
        ("m14", "Mineral Water (1L)", 20.0, "Beverages"),
        ("m15", "Fresh Lime Soda", 50.0, "Beverages"),
    ]
    .into_iter()
    .map(|(id, name, price, category)| MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category: category.to_string(),
    })
    .collect()
}
