use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(store: &mut NoteStore, index: usize) -> Result<CmdResult> {
    let removed = store.delete(index)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Note {} deleted: {}",
        index, removed.text
    ))))
}
