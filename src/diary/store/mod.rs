//! # Storage Layer
//!
//! Notes live in memory in a [`NoteStore`] for the whole session and only touch
//! the disk when the user asks for it: there is no autosave.
//!
//! ## Modules
//!
//! - [`memory`]: the [`NoteStore`] itself, an ordered collection addressed by
//!   position, with its queries and sorts.
//! - [`fs`]: JSON persistence (save / load). This is the canonical format.
//! - [`tabular`]: a one-way comma separated export for spreadsheets.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── config.json          # DiaryConfig
//! ├── notes.json           # guest notes (JSON array)
//! ├── notes.csv            # tabular export
//! ├── users.json           # username -> password
//! └── <user>_notes.json    # one note file per account
//! ```
//!
//! A note is stored as `{ "text": .., "tags": [..], "date": "YYYY-MM-DD" }`.
//! Loading never re-stamps dates, and a failed load or save never touches the
//! in-memory store: [`fs::load`] builds a fresh store that the caller swaps in
//! only on success.

pub mod fs;
pub mod memory;
pub mod tabular;

pub use memory::NoteStore;
