use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::StoreError;
use crate::storage::{Result, StorageBackend, AUTOSAVE_KEY, JOURNAL_KEY};
use crate::utils::now_millis;

use super::autosave::AutosaveSnapshot;
use super::draft::Draft;
use super::entry::{parse_tags, JournalEntry};
use super::filter::EntryFilter;

/// Source of fresh entry ids, injected so tests can use predictable ids.
pub trait IdSource: Send {
    fn next_id(&mut self) -> String;
}

/// Default id source: `entry_`-prefixed random UUIDs, collision-safe
/// under rapid successive creates.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        format!("entry_{}", Uuid::new_v4())
    }
}

/// Owns the ordered journal entry list and persists it after every
/// mutation. The list is kept in reverse-chronological insertion order:
/// new entries are prepended, and nothing ever re-sorts by date.
pub struct EntryStore<B: StorageBackend> {
    backend: B,
    entries: Vec<JournalEntry>,
    ids: Box<dyn IdSource>,
}

impl<B: StorageBackend> EntryStore<B> {
    /// Loads the persisted list from `backend` with UUID-based ids.
    /// Corrupt or missing data recovers as an empty journal.
    pub fn load(backend: B) -> Result<Self> {
        Self::with_ids(backend, Box::new(UuidIds))
    }

    pub fn with_ids(backend: B, ids: Box<dyn IdSource>) -> Result<Self> {
        let entries = match backend.read(JOURNAL_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<JournalEntry>>(&raw) {
                Ok(list) => list,
                Err(err) => {
                    warn!(%err, "discarding corrupt journal data");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(Self {
            backend,
            entries,
            ids,
        })
    }

    /// Fresh editing context: an unbound draft dated today. The persisted
    /// list is untouched.
    pub fn create_draft(&self) -> Draft {
        Draft::new()
    }

    /// Draft populated from the stored entry with `id`, for editing.
    pub fn draft_for(&self, id: &str) -> Option<Draft> {
        self.entry(id).map(Draft::from_entry)
    }

    /// Persists the draft as a new or updated entry.
    ///
    /// Fails with `EmptyEntry` when both title and content trim empty,
    /// leaving the list untouched. An unbound draft becomes a new entry
    /// prepended to the list; a bound draft updates its entry in place,
    /// preserving `created_at` and bumping `updated_at`.
    pub fn save_draft(&mut self, draft: &Draft) -> Result<&JournalEntry> {
        let title = draft.title.trim();
        let content = draft.content.trim();
        if title.is_empty() && content.is_empty() {
            return Err(StoreError::EmptyEntry);
        }
        let tags = parse_tags(&draft.tags);
        let now = now_millis();

        let index = match &draft.id {
            Some(id) => {
                let index = self
                    .entries
                    .iter()
                    .position(|e| &e.id == id)
                    .ok_or_else(|| StoreError::UnknownEntry(id.clone()))?;
                let entry = &mut self.entries[index];
                entry.title = title.to_string();
                entry.content = content.to_string();
                entry.date = draft.date.clone();
                entry.mood = draft.mood;
                entry.tags = tags;
                // updated_at never regresses below created_at.
                entry.updated_at = now.max(entry.created_at);
                index
            }
            None => {
                let id = self.ids.next_id();
                self.entries.insert(
                    0,
                    JournalEntry {
                        id,
                        title: title.to_string(),
                        content: content.to_string(),
                        date: draft.date.clone(),
                        mood: draft.mood,
                        tags,
                        created_at: now,
                        updated_at: now,
                    },
                );
                0
            }
        };
        self.persist()?;
        let entry = &self.entries[index];
        debug!(id = %entry.id, "entry saved");
        Ok(entry)
    }

    /// Removes the entry with `id` and persists. Missing ids are a no-op.
    /// Confirmation is the caller's responsibility.
    pub fn delete_entry(&mut self, id: &str) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            self.persist()?;
            debug!(%id, "entry deleted");
        }
        Ok(())
    }

    /// Entries matching `filter`, in store order (newest first).
    pub fn list_entries(&self, filter: &EntryFilter) -> Vec<&JournalEntry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    pub fn entry(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Serializes the full list as a pretty-printed JSON array.
    pub fn export_all(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Merges a previously exported document into the store.
    ///
    /// The document must parse as a JSON array of entry-shaped records;
    /// anything else fails with `InvalidFormat` and leaves the store
    /// unchanged. Imported entries are prepended ahead of existing ones,
    /// their order preserved. Ids are not deduplicated: records imported
    /// from another environment may repeat ids already present.
    pub fn import_merge(&mut self, document: &str) -> Result<usize> {
        let mut merged: Vec<JournalEntry> = serde_json::from_str(document)
            .map_err(|err| StoreError::InvalidFormat(err.to_string()))?;
        let imported = merged.len();
        merged.extend(self.entries.drain(..));
        self.entries = merged;
        self.persist()?;
        debug!(imported, "entries imported");
        Ok(imported)
    }

    /// Overwrites the single autosave slot with `snapshot`. The slot is
    /// never read back by the store.
    pub fn write_autosave(&self, snapshot: &AutosaveSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        self.backend.write(AUTOSAVE_KEY, &json)
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        self.backend.write(JOURNAL_KEY, &json)
    }
}

/// Conventional filename for an export created on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("journal-export-{}.json", date.format("%Y-%m-%d"))
}
