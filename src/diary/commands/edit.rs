use crate::commands::{CmdMessage, CmdResult, DisplayNote};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(
    store: &mut NoteStore,
    index: usize,
    text: String,
    tags: Vec<String>,
) -> Result<CmdResult> {
    let note = store.edit(index, text, tags)?.clone();
    Ok(CmdResult::default()
        .with_listed_notes(vec![DisplayNote::at(index, note)])
        .with_message(CmdMessage::success(format!("Note {} updated.", index))))
}
