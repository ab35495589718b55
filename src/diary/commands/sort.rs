use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::NoteStore;

pub fn by_date(store: &NoteStore) -> Result<CmdResult> {
    Ok(CmdResult::from_matches(store.sorted_by_date()))
}

pub fn by_tags(store: &NoteStore) -> Result<CmdResult> {
    Ok(CmdResult::from_matches(store.sorted_by_tags()))
}
