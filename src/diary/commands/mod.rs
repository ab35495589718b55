//! # Command Layer
//!
//! One module per user-facing operation. Commands take the store (or the user
//! directory) plus plain Rust arguments and return a [`CmdResult`]: the notes
//! to show and the messages to report. They never print.

use crate::model::Note;

pub mod account;
pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;
pub mod persist;
pub mod sort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A note as shown to the user. `index` is its store position when the listing
/// follows store order; query and sort results leave it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub index: Option<usize>,
    pub note: Note,
}

impl DisplayNote {
    pub fn at(index: usize, note: Note) -> Self {
        Self {
            index: Some(index),
            note,
        }
    }

    pub fn unindexed(note: Note) -> Self {
        Self { index: None, note }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_notes: Vec<DisplayNote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    /// Lists query output, or says so when nothing matched.
    pub(crate) fn from_matches(notes: Vec<Note>) -> Self {
        if notes.is_empty() {
            return Self::default().with_message(CmdMessage::info("No notes found."));
        }
        Self::default().with_listed_notes(notes.into_iter().map(DisplayNote::unindexed).collect())
    }
}
