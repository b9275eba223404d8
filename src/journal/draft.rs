use crate::utils::today;

use super::autosave::AutosaveSnapshot;
use super::entry::{JournalEntry, Mood};

/// The in-progress, possibly-unsaved entry being edited.
///
/// A draft with no bound id saves as a new entry; a bound draft updates
/// the entry it was opened from. Tags are held as the raw comma-separated
/// field text and only split on save.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub date: String,
    pub mood: Mood,
    pub tags: String,
}

impl Draft {
    /// Fresh, unbound draft pre-filled with today's date.
    pub fn new() -> Self {
        Self {
            date: today(),
            ..Self::default()
        }
    }

    /// Draft populated from an existing entry, bound to its id.
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            title: entry.title.clone(),
            content: entry.content.clone(),
            date: entry.date.clone(),
            mood: entry.mood,
            tags: entry.joined_tags(", "),
        }
    }

    /// Copy of the current field values for the autosave slot.
    pub fn snapshot(&self) -> AutosaveSnapshot {
        AutosaveSnapshot {
            title: self.title.clone(),
            content: self.content.clone(),
            date: self.date.clone(),
            mood: self.mood,
            tags: self.tags.clone(),
        }
    }
}
