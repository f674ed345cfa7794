//! Sqlite-backed [`quote_core::store::QuoteStore`] implementation.

mod store;

pub use store::SqliteQuoteStore;
