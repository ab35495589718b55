use crate::commands::{CmdMessage, CmdResult, DisplayNote};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(store: &NoteStore) -> Result<CmdResult> {
    if store.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("The diary is empty.")));
    }
    let listed = store
        .list()
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote::at(i, note))
        .collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}
