use serde::{Deserialize, Serialize};

/// Fixed mood enumeration. `Unset` is the absent value and serializes as
/// the empty string; unrecognized stored values deserialize to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    #[default]
    #[serde(rename = "")]
    #[serde(other)]
    Unset,
}

impl Mood {
    /// Emoji shown next to an entry in list views.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "\u{1F60A}",
            Mood::Neutral => "\u{1F610}",
            Mood::Sad => "\u{1F614}",
            Mood::Unset => "",
        }
    }
}

/// A persisted journal entry.
///
/// The id is assigned once at creation and never changes. The persisted
/// list keeps entries in reverse-chronological insertion order (newest
/// first); it is never re-sorted by `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub mood: Mood,
    /// Free-text labels, order preserved as entered, duplicates allowed.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: i64,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: i64,
}

impl JournalEntry {
    /// Tags joined with `sep`, the form filter predicates match against.
    pub fn joined_tags(&self, sep: &str) -> String {
        self.tags.join(sep)
    }
}

/// Splits a comma-separated tag field into trimmed, non-empty labels.
pub(crate) fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Compact relative-time label for an epoch-millisecond timestamp.
pub fn time_ago(timestamp_ms: i64, now_ms: i64) -> String {
    if timestamp_ms == 0 {
        return String::new();
    }
    let minutes = (now_ms - timestamp_ms) / 60_000;
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h");
    }
    format!("{}d", hours / 24)
}
