//! Comma separated export.
//!
//! One header row (`text,tags,date`) and one row per note. Tags are flattened
//! with `", "`, so a tag that itself contains that separator cannot be told
//! apart after export. This format is write-only.

use super::fs::write_file;
use super::NoteStore;
use crate::error::Result;
use crate::model::Note;
use log::debug;
use std::path::Path;

const HEADER: [&str; 3] = ["text", "tags", "date"];

pub fn save(store: &NoteStore, path: &Path) -> Result<()> {
    let content = render(store);
    write_file(path, &content)?;
    debug!("exported {} notes to {}", store.len(), path.display());
    Ok(())
}

pub fn render(store: &NoteStore) -> String {
    let mut out = row(&HEADER);
    for note in store.iter() {
        out.push_str(&note_row(note));
    }
    out
}

fn note_row(note: &Note) -> String {
    let date = note.date.to_string();
    row(&[note.text.as_str(), note.joined_tags().as_str(), date.as_str()])
}

fn row(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .map(|f| escape(f))
        .collect::<Vec<_>>()
        .join(",");
    line.push_str("\r\n");
    line
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
