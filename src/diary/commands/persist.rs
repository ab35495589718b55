use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{fs, tabular, NoteStore};
use std::path::Path;

pub fn save(store: &NoteStore, path: &Path) -> Result<CmdResult> {
    fs::save(store, path)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Saved {} notes to {}",
        store.len(),
        path.display()
    ))))
}

pub fn export(store: &NoteStore, path: &Path) -> Result<CmdResult> {
    tabular::save(store, path)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Exported {} notes to {}",
        store.len(),
        path.display()
    ))))
}

/// Replaces the store's contents with the file's. On failure the store is left as it was.
pub fn load(store: &mut NoteStore, path: &Path) -> Result<CmdResult> {
    let loaded = fs::load(path)?;
    let mut result = CmdResult::default();
    if !store.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Replaced {} unsaved notes in memory.",
            store.len()
        )));
    }
    *store = loaded;
    result.add_message(CmdMessage::success(format!(
        "Loaded {} notes from {}",
        store.len(),
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiaryError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn save_then_load_restores_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let original = StoreFixture::new().with_sample_notes().store;
        save(&original, &path).unwrap();

        let mut store = NoteStore::new();
        let result = load(&mut store, &path).unwrap();
        assert_eq!(store, original);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn failed_load_keeps_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = StoreFixture::new().with_notes(2).store;
        let before = store.clone();

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load(&mut store, &missing),
            Err(DiaryError::FileNotFound(_))
        ));
        assert_eq!(store, before);

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "[{").unwrap();
        assert!(matches!(
            load(&mut store, &broken),
            Err(DiaryError::MalformedData { .. })
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn load_over_unsaved_notes_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        save(&NoteStore::new(), &path).unwrap();

        let mut store = StoreFixture::new().with_notes(1).store;
        let result = load(&mut store, &path).unwrap();
        assert!(store.is_empty());
        assert_eq!(result.messages[0].content, "Replaced 1 unsaved notes in memory.");
    }

    #[test]
    fn export_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.csv");
        let result = export(&StoreFixture::new().with_notes(2).store, &path).unwrap();
        assert!(result.messages[0].content.starts_with("Exported 2 notes"));
        assert!(path.exists());
    }
}
