//! # Diary Architecture
//!
//! Diary keeps short, tagged, dated notes. Like any UI client would, the
//! interactive menu in the binary talks to the library only through the
//! [`api`] facade, so the core never prints and never exits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Numbered menu, prompts, colored output                   │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: guest store or logged-in account       │
//! │  - Picks the active store and file, dispatches to commands  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, store/, users.rs)                          │
//! │  - Note, NoteStore, JSON and tabular files, accounts        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions, not ids
//!
//! Notes are addressed by their position in the store. Deleting a note shifts
//! every later note down by one, so a position read before a delete may point
//! at a different note afterwards.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: [`store::NoteStore`] and its JSON / tabular persistence
//! - [`users`]: Accounts and the credentials file
//! - [`model`]: The [`model::Note`] type and tag helpers
//! - [`config`]: Configuration and file locations
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod users;
