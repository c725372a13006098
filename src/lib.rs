//! Persistence and domain layer for a single-location quick-service
//! restaurant POS.
//!
//! Everything runs in-process over one embedded [redb](https://docs.rs/redb)
//! database: the menu catalog, the customer directory keyed by phone
//! number, and the append-only order ledger. [`PosSystem`] wires the
//! three together over a shared [`RecordStore`], and
//! [`PosSystem::place_order`] is the one-call checkout path that
//! upserts the customer and confirms the draft.
//!
//! Confirmed orders denormalize everything they need (customer details,
//! item names and prices), so later menu edits or customer updates
//! never rewrite history. Invoice rendering and CSV export work on
//! plain model values and never touch storage themselves.

pub mod catalog;
pub mod config;
pub mod directory;
pub mod draft;
pub mod error;
pub mod export;
pub mod ids;
pub mod invoice;
pub mod ledger;
pub mod models;
pub mod money;
pub mod store;
pub mod system;
pub mod util;

pub use catalog::MenuCatalog;
pub use config::Config;
pub use directory::CustomerDirectory;
pub use draft::OrderDraft;
pub use error::{FieldError, PosError, PosResult, ValidationError};
pub use export::{ExportError, ExportResult, customers_to_csv, orders_to_csv};
pub use invoice::{INVOICE_WIDTH, InvoiceRenderer};
pub use ledger::OrderLedger;
pub use models::*;
pub use store::{Collection, RecordStore, StorageError, StorageResult};
pub use system::PosSystem;
