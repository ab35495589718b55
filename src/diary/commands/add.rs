use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(store: &mut NoteStore, text: String, tags: Vec<String>) -> Result<CmdResult> {
    let index = store.add(text, tags);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!("Note added ({}).", index))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::today;

    #[test]
    fn appends_note_dated_today() {
        let mut store = NoteStore::new();
        run(&mut store, "first".into(), vec!["x".into()]).unwrap();
        let result = run(&mut store, "second".into(), vec![]).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().date, today());
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Note added (1).");
    }
}
