use std::time::{Duration, Instant};

use daybook_core::journal::{
    apply_format, render_preview, AutosaveBuffer, AutosaveSnapshot, Draft, EntryFilter,
    EntryStore, FormatAction, JournalEntry, Mood, AUTOSAVE_DELAY,
};
use daybook_core::storage::{JsonStorage, StorageBackend, AUTOSAVE_KEY};
use tempfile::tempdir;

fn store_at(root: &std::path::Path) -> EntryStore<JsonStorage> {
    let storage = JsonStorage::new(Some(root.to_path_buf())).expect("open storage");
    EntryStore::load(storage).expect("load journal")
}

fn draft(title: &str, content: &str, mood: Mood, tags: &str) -> Draft {
    Draft {
        title: title.into(),
        content: content.into(),
        mood,
        tags: tags.into(),
        ..Draft::new()
    }
}

#[test]
fn entries_survive_a_reload_newest_first() {
    let temp = tempdir().unwrap();

    let mut store = store_at(temp.path());
    store
        .save_draft(&draft("morning", "pages", Mood::Neutral, "habit"))
        .unwrap();
    store
        .save_draft(&draft("evening", "recap", Mood::Happy, "habit, recap"))
        .unwrap();

    let reloaded = store_at(temp.path());
    let titles: Vec<_> = reloaded.entries().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["evening", "morning"]);
    assert_eq!(reloaded.entries()[0].tags, vec!["habit", "recap"]);
    assert_eq!(reloaded.entries()[0].mood, Mood::Happy);
}

#[test]
fn editing_a_reloaded_entry_keeps_its_identity() {
    let temp = tempdir().unwrap();

    let mut store = store_at(temp.path());
    let id = store
        .save_draft(&draft("first pass", "text", Mood::Unset, ""))
        .unwrap()
        .id
        .clone();
    let created = store.entry(&id).unwrap().created_at;

    let mut store = store_at(temp.path());
    let mut edit = store.draft_for(&id).unwrap();
    edit.content = "text, revised".into();
    store.save_draft(&edit).unwrap();

    let reloaded = store_at(temp.path());
    let entry = reloaded.entry(&id).unwrap();
    assert_eq!(entry.created_at, created);
    assert!(entry.updated_at >= entry.created_at);
    assert_eq!(entry.content, "text, revised");
    assert_eq!(reloaded.entries().len(), 1);
}

#[test]
fn filter_composition_is_order_independent() {
    let temp = tempdir().unwrap();
    let mut store = store_at(temp.path());
    store
        .save_draft(&draft("grocery run", "bought apples", Mood::Happy, "errand"))
        .unwrap();
    store
        .save_draft(&draft("bad day", "rain all day", Mood::Sad, "weather, errand"))
        .unwrap();
    store
        .save_draft(&draft("errand notes", "post office", Mood::Sad, "errand"))
        .unwrap();

    let combined = EntryFilter::new()
        .with_mood(Mood::Sad)
        .with_tag("errand")
        .with_text("day");
    let combined_ids: Vec<_> = store
        .list_entries(&combined)
        .iter()
        .map(|e| e.id.clone())
        .collect();

    // Successive narrowing passes, in every order of the three predicates.
    let mood_only = EntryFilter::new().with_mood(Mood::Sad);
    let tag_only = EntryFilter::new().with_tag("errand");
    let text_only = EntryFilter::new().with_text("day");
    let passes: [&EntryFilter; 3] = [&mood_only, &tag_only, &text_only];
    let orders = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    for order in orders {
        let mut survivors: Vec<&JournalEntry> = store.entries().iter().collect();
        for index in order {
            survivors.retain(|e| passes[index].matches(e));
        }
        let ids: Vec<_> = survivors.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, combined_ids, "order {order:?} diverged");
    }
    assert_eq!(combined_ids.len(), 1);
}

#[test]
fn export_round_trips_through_import() {
    let temp = tempdir().unwrap();
    let mut store = store_at(temp.path());
    store
        .save_draft(&draft("kept", "original body", Mood::Neutral, "a, b"))
        .unwrap();

    let doc = store.export_all().unwrap();
    let imported = store.import_merge(&doc).unwrap();
    assert_eq!(imported, 1);
    assert_eq!(store.entries().len(), 2);

    // Both copies of the entry carry the same id; accepted, not a defect.
    let id = &store.entries()[0].id;
    assert_eq!(store.entries().iter().filter(|e| &e.id == id).count(), 2);

    let reloaded = store_at(temp.path());
    assert_eq!(reloaded.entries().len(), 2);
}

#[test]
fn import_failure_leaves_the_persisted_list_alone() {
    let temp = tempdir().unwrap();
    let mut store = store_at(temp.path());
    store
        .save_draft(&draft("survivor", "", Mood::Unset, ""))
        .unwrap();

    assert!(store.import_merge(r#"{"not":"an array"}"#).is_err());

    let reloaded = store_at(temp.path());
    assert_eq!(reloaded.entries().len(), 1);
    assert_eq!(reloaded.entries()[0].title, "survivor");
}

#[test]
fn debounced_autosave_writes_only_the_last_change() {
    let temp = tempdir().unwrap();
    let store = store_at(temp.path());
    let mut buffer = AutosaveBuffer::new();
    let t0 = Instant::now();

    let mut d = store.create_draft();
    d.content = "typing".into();
    buffer.record(d.snapshot(), t0);
    d.content = "typing more".into();
    buffer.record(d.snapshot(), t0 + Duration::from_millis(500));

    assert!(buffer.poll(t0 + Duration::from_millis(900)).is_none());
    let flushed = buffer.poll(t0 + Duration::from_millis(500) + AUTOSAVE_DELAY);
    let snapshot = flushed.expect("idle window elapsed");
    store.write_autosave(&snapshot).unwrap();

    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
    let raw = storage.read(AUTOSAVE_KEY).unwrap().expect("slot written");
    let slot: AutosaveSnapshot = serde_json::from_str(&raw).unwrap();
    assert_eq!(slot.content, "typing more");
}

#[test]
fn preview_and_toolbar_work_end_to_end() {
    let draft_body = "journal line";
    let applied = apply_format(draft_body, 0..7, FormatAction::Bold);
    assert_eq!(applied.content, "**journal** line");

    let html = render_preview(&applied.content);
    assert_eq!(html, "<strong>journal</strong> line");

    assert_eq!(render_preview(""), "<em>Nothing to preview</em>");
    assert!(!render_preview("<script>bad()</script>").contains("<script>"));
}
