//! Core domain for the RUNSPEND race-event quote builder: the supply
//! catalog, per-item calculators, the quote cart, quote finalization, the
//! persisted-store contract, and the backup/renderer interfaces.

pub mod backup;
pub mod calculators;
pub mod cart;
pub mod catalog;
pub mod finalize;
pub mod models;
pub mod notices;
pub mod render;
pub mod store;

pub use backup::{BackupError, BackupPayload};
pub use calculators::{CalculatorInput, ItemCalculator};
pub use cart::QuoteCart;
pub use finalize::finalize_quote;
pub use models::{AssetRecord, CatalogItem, ItemKind, QuoteItem, QuoteRecord, Theme, UserProfile};
pub use store::{MemoryStore, QuoteStore, StoreError};
