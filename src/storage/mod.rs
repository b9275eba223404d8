pub mod json_backend;
pub mod memory;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage key for the persisted ledger transaction list.
pub const LEDGER_KEY: &str = "transactions";
/// Storage key for the persisted journal entry list.
pub const JOURNAL_KEY: &str = "journal_entries_v1";
/// Storage key for the single-slot autosave snapshot.
pub const AUTOSAVE_KEY: &str = "journal_autosave";

/// Abstraction over string-valued key-value persistence backends.
///
/// Every mutating store operation writes its full list through this trait
/// before returning, so a backend sees whole-document replacements only.
pub trait StorageBackend: Send + Sync {
    /// Returns the stored value for `key`, or `None` if the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;
    /// Replaces the stored value for `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
    /// Removes `key` if present. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
