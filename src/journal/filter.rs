use super::entry::{JournalEntry, Mood};

/// Three independent, AND-combined predicates over journal entries.
///
/// Each predicate is skipped when its field is unset, so the default
/// filter matches everything. Matching never re-orders results; listing
/// preserves the store's newest-first order.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    mood: Option<Mood>,
    tag: Option<String>,
    text: Option<String>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires an exact mood match.
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Requires a case-insensitive substring match against the
    /// comma-joined tag string. Empty input leaves the predicate unset.
    pub fn with_tag(mut self, tag: &str) -> Self {
        if !tag.is_empty() {
            self.tag = Some(tag.to_lowercase());
        }
        self
    }

    /// Requires a case-insensitive substring match against title,
    /// content, or the space-joined tags. Empty input leaves the
    /// predicate unset.
    pub fn with_text(mut self, query: &str) -> Self {
        if !query.is_empty() {
            self.text = Some(query.to_lowercase());
        }
        self
    }

    pub fn matches(&self, entry: &JournalEntry) -> bool {
        if let Some(mood) = self.mood {
            if entry.mood != mood {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !entry.joined_tags(",").to_lowercase().contains(tag.as_str()) {
                return false;
            }
        }
        if let Some(text) = &self.text {
            let in_title = entry.title.to_lowercase().contains(text.as_str());
            let in_content = entry.content.to_lowercase().contains(text.as_str());
            let in_tags = entry.joined_tags(" ").to_lowercase().contains(text.as_str());
            if !(in_title || in_content || in_tags) {
                return false;
            }
        }
        true
    }
}
