use thiserror::Error;

/// Error type that captures the failure modes of the ledger and journal stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Ledger input rejected before any state change.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Journal save attempted with neither title nor content.
    #[error("Entry has no title and no content")]
    EmptyEntry,
    /// Import payload did not parse as an array of entry records.
    #[error("Invalid import format: {0}")]
    InvalidFormat(String),
    /// Draft is bound to an entry id that no longer exists.
    #[error("Unknown entry: {0}")]
    UnknownEntry(String),
}
