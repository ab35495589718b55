use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::NoteStore;
use chrono::NaiveDate;

pub fn by_date(store: &NoteStore, date: NaiveDate) -> Result<CmdResult> {
    Ok(CmdResult::from_matches(store.find_by_date(date)))
}

pub fn by_tag(store: &NoteStore, tag: &str) -> Result<CmdResult> {
    Ok(CmdResult::from_matches(store.find_by_tag(tag)))
}

pub fn by_text(store: &NoteStore, substring: &str) -> Result<CmdResult> {
    Ok(CmdResult::from_matches(store.find_by_text(substring)))
}
