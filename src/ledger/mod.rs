//! Ledger domain models and the transaction store with derived totals.

pub mod store;
pub mod transaction;

pub use store::{LedgerStore, LedgerSummary};
pub use transaction::Transaction;
