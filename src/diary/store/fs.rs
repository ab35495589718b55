use super::NoteStore;
use crate::error::{DiaryError, Result};
use crate::model::Note;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Writes every note as a pretty-printed JSON array, replacing any existing file.
pub fn save(store: &NoteStore, path: &Path) -> Result<()> {
    let notes: Vec<&Note> = store.iter().collect();
    let content = serde_json::to_string_pretty(&notes).map_err(DiaryError::Serialization)?;
    write_file(path, &content)?;
    debug!("saved {} notes to {}", notes.len(), path.display());
    Ok(())
}

/// Reads a note file into a fresh store. Stored dates are kept as written.
pub fn load(path: &Path) -> Result<NoteStore> {
    let content = read_file(path)?;
    let notes: Vec<Note> =
        serde_json::from_str(&content).map_err(|e| DiaryError::MalformedData {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    debug!("loaded {} notes from {}", notes.len(), path.display());
    Ok(NoteStore::from_notes(notes))
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DiaryError::FileNotFound(path.to_path_buf()),
        ErrorKind::InvalidData => DiaryError::MalformedData {
            path: path.to_path_buf(),
            reason: "file is not valid UTF-8".to_string(),
        },
        _ => DiaryError::Io(e),
    })
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(DiaryError::Io)?;
        }
    }
    fs::write(path, content).map_err(DiaryError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::*;

    #[test]
    fn round_trip_preserves_notes_and_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let store = StoreFixture::new()
            .with_dated_note("Первая заметка", &["Работа", "Важное"], "2025-03-06")
            .with_dated_note("dup tags", &["a", "a"], "2024-12-31")
            .with_dated_note("no tags", &[], "2025-01-01")
            .store;

        save(&store, &path).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn writes_tags_as_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let store = StoreFixture::new()
            .with_dated_note("t", &["x", "y"], "2025-03-06")
            .store;
        save(&store, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"text": "t", "tags": ["x", "y"], "date": "2025-03-06"}])
        );
    }

    #[test]
    fn save_overwrites_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("notes.json");
        save(&StoreFixture::new().with_notes(3).store, &path).unwrap();
        save(&StoreFixture::new().with_notes(1).store, &path).unwrap();
        assert_eq!(load(&path).unwrap().len(), 1);
    }

    #[test]
    fn save_into_a_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = save(&NoteStore::new(), dir.path()).unwrap_err();
        assert!(matches!(err, DiaryError::Io(_)));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(load(&path), Err(DiaryError::FileNotFound(p)) if p == path));
    }

    #[test]
    fn load_garbage_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        for content in [
            "not json",
            r#"{"text": "t"}"#,
            r#"[{"text": "t", "date": "2025-03-06"}]"#,
            r#"[{"text": 5, "tags": [], "date": "2025-03-06"}]"#,
            r#"[{"text": "t", "tags": [], "date": "yesterday"}]"#,
            r#"[{"text": "t", "tags": [], "date": "2025-3-6"}]"#,
            r#"[{"text": "t", "tags": [], "date": " 2025-03-06"}]"#,
        ] {
            fs::write(&path, content).unwrap();
            assert!(
                matches!(load(&path), Err(DiaryError::MalformedData { .. })),
                "accepted {content}"
            );
        }
    }

    #[test]
    fn load_accepts_joined_tag_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(
            &path,
            r#"[{"text": "t", "tags": "работа, Важное", "date": "2025-03-06"}]"#,
        )
        .unwrap();
        let store = load(&path).unwrap();
        assert_eq!(store.get(0).unwrap().tags, tags(&["работа", "Важное"]));
    }
}
