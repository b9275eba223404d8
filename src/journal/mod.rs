//! Journal domain models and the entry store: drafts, filtered listing,
//! markdown preview, autosave, and JSON import/export.

pub mod autosave;
pub mod draft;
pub mod editor;
pub mod entry;
pub mod filter;
pub mod markdown;
pub mod store;

pub use autosave::{AutosaveBuffer, AutosaveSnapshot, AUTOSAVE_DELAY};
pub use draft::Draft;
pub use editor::{apply_format, FormatAction, FormatApplied};
pub use entry::{time_ago, JournalEntry, Mood};
pub use filter::EntryFilter;
pub use markdown::render_preview;
pub use store::{export_file_name, EntryStore, IdSource, UuidIds};
