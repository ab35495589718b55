use crate::error::{DiaryError, Result};
use crate::model::Note;
use chrono::NaiveDate;

/// Ordered, in-memory collection of notes.
///
/// Positions are contiguous (`0..len`). Deleting compacts the sequence, so every
/// later note moves down by one. Queries hand out owned snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Appends a note dated today and returns its position.
    pub fn add(&mut self, text: impl Into<String>, tags: Vec<String>) -> usize {
        self.push(Note::new(text, tags))
    }

    pub fn push(&mut self, note: Note) -> usize {
        self.notes.push(note);
        self.notes.len() - 1
    }

    pub fn delete(&mut self, index: usize) -> Result<Note> {
        self.check_index(index)?;
        Ok(self.notes.remove(index))
    }

    /// Replaces text and tags in place. The creation date is kept.
    pub fn edit(
        &mut self,
        index: usize,
        text: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<&Note> {
        self.check_index(index)?;
        let note = &mut self.notes[index];
        note.text = text.into();
        note.tags = tags;
        Ok(&*note)
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Vec<Note> {
        self.matching(|note| note.date == date)
    }

    pub fn find_by_text(&self, substring: &str) -> Vec<Note> {
        let needle = substring.to_lowercase();
        self.matching(|note| note.text.to_lowercase().contains(&needle))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<Note> {
        self.matching(|note| note.has_tag(tag))
    }

    pub fn sorted_by_date(&self) -> Vec<Note> {
        let mut notes = self.list();
        // sort_by_key is stable: same-day notes keep their store order
        notes.sort_by_key(|note| note.date);
        notes
    }

    pub fn sorted_by_tags(&self) -> Vec<Note> {
        let mut notes = self.list();
        notes.sort_by_cached_key(Note::joined_tags);
        notes
    }

    pub fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    fn matching(&self, predicate: impl Fn(&Note) -> bool) -> Vec<Note> {
        self.notes.iter().filter(|&n| predicate(n)).cloned().collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.notes.len() {
            Ok(())
        } else {
            Err(DiaryError::IndexOutOfRange {
                index,
                len: self.notes.len(),
            })
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    pub struct StoreFixture {
        pub store: NoteStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .add(format!("Note {}", i + 1), vec![format!("tag{}", i + 1)]);
            }
            self
        }

        pub fn with_note(mut self, text: &str, tag_list: &[&str]) -> Self {
            self.store.add(text, tags(tag_list));
            self
        }

        pub fn with_dated_note(mut self, text: &str, tag_list: &[&str], day: &str) -> Self {
            self.store
                .push(Note::with_date(text, tags(tag_list), date(day)));
            self
        }

        /// The three notes the diary walkthrough starts from.
        pub fn with_sample_notes(self) -> Self {
            self.with_note("Первая заметка", &["Хобби", "Развлечение"])
                .with_note("Вторая заметка", &["работа", "Важное"])
                .with_note("Третья заметка", &["Фитнес", "Здоровье"])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::model::today;

    fn texts(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.text.as_str()).collect()
    }

    #[test]
    fn add_appends_with_todays_date() {
        let mut store = NoteStore::new();
        assert_eq!(store.add("a", tags(&["x"])), 0);
        assert_eq!(store.add("b", vec![]), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().date, today());
    }

    #[test]
    fn delete_shifts_later_notes_down() {
        let mut store = StoreFixture::new().with_notes(3).store;
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.text, "Note 2");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().text, "Note 3");
    }

    #[test]
    fn delete_out_of_range_leaves_store_unchanged() {
        let mut store = StoreFixture::new().with_notes(2).store;
        let before = store.clone();
        let err = store.delete(2).unwrap_err();
        assert!(matches!(err, DiaryError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(store, before);
    }

    #[test]
    fn edit_keeps_date_and_length() {
        let mut store = StoreFixture::new()
            .with_dated_note("old", &["a"], "2024-01-02")
            .with_note("other", &[])
            .store;
        store.edit(0, "new", tags(&["b", "c"])).unwrap();

        let note = store.get(0).unwrap();
        assert_eq!(note.text, "new");
        assert_eq!(note.tags, tags(&["b", "c"]));
        assert_eq!(note.date, date("2024-01-02"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn edit_out_of_range_is_not_found() {
        let mut store = StoreFixture::new().with_notes(1).store;
        let before = store.clone();
        assert!(matches!(
            store.edit(5, "x", vec![]),
            Err(DiaryError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn walkthrough_scenario() {
        let mut store = StoreFixture::new().with_sample_notes().store;
        store.delete(2).unwrap();
        assert_eq!(store.len(), 2);
        store.edit(0, "Новая заметка", tags(&["личное"])).unwrap();

        let expected = vec![
            Note::with_date("Новая заметка", tags(&["личное"]), today()),
            Note::with_date("Вторая заметка", tags(&["работа", "Важное"]), today()),
        ];
        assert_eq!(store.list(), expected);
    }

    #[test]
    fn find_by_tag_is_case_insensitive_exact() {
        let store = StoreFixture::new()
            .with_note("upper", &["Работа"])
            .with_note("lower", &["работа"])
            .with_note("longer", &["Работать"])
            .store;
        assert_eq!(texts(&store.find_by_tag("работа")), vec!["upper", "lower"]);
        assert!(store.find_by_tag("missing").is_empty());
    }

    #[test]
    fn find_by_text_matches_substring_ignoring_case() {
        let store = StoreFixture::new()
            .with_note("Buy MILK", &[])
            .with_note("call mom", &[])
            .with_note("milkshake", &[])
            .store;
        assert_eq!(
            texts(&store.find_by_text("milk")),
            vec!["Buy MILK", "milkshake"]
        );
    }

    #[test]
    fn find_by_date_is_exact_and_ordered() {
        let store = StoreFixture::new()
            .with_dated_note("a", &[], "2025-03-06")
            .with_dated_note("b", &[], "2025-03-07")
            .with_dated_note("c", &[], "2025-03-06")
            .store;
        assert_eq!(texts(&store.find_by_date(date("2025-03-06"))), vec!["a", "c"]);
        assert!(store.find_by_date(date("2020-01-01")).is_empty());
    }

    #[test]
    fn sorted_by_date_is_stable() {
        let store = StoreFixture::new()
            .with_dated_note("late", &[], "2025-05-01")
            .with_dated_note("first same day", &[], "2025-01-01")
            .with_dated_note("second same day", &[], "2025-01-01")
            .store;
        assert_eq!(
            texts(&store.sorted_by_date()),
            vec!["first same day", "second same day", "late"]
        );
        assert_eq!(texts(&store.list()), vec!["late", "first same day", "second same day"]);
    }

    #[test]
    fn sorted_by_tags_compares_joined_string() {
        let store = StoreFixture::new()
            .with_note("b", &["b"])
            .with_note("a-z", &["a", "z"])
            .with_note("upper", &["B"])
            .with_note("a", &["a"])
            .with_note("b again", &["b"])
            .store;
        // "B" < "a" < "a, z" < "b" byte-wise; equal keys keep order
        assert_eq!(
            texts(&store.sorted_by_tags()),
            vec!["upper", "a", "a-z", "b", "b again"]
        );
    }

    #[test]
    fn query_results_are_snapshots() {
        let mut store = StoreFixture::new().with_notes(2).store;
        let listed = store.list();
        store.edit(0, "changed", vec![]).unwrap();
        store.delete(1).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].text, "Note 1");
    }
}
