//! # API Facade
//!
//! [`DiaryApi`] is the single entry point for every UI. It owns the session:
//! the guest note store, the logged-in [`Account`] if any, and the file
//! locations. Each method picks the active store and dispatches to a command.
//!
//! The active store is the account's while someone is logged in and the guest
//! store otherwise. Save and load follow the same rule for the file they use:
//! `<username>_notes.json` for an account, the configured notes file for the
//! guest. Nothing is saved implicitly, not even on logout.

use crate::commands::{self, persist, CmdMessage, CmdResult};
use crate::config::{DiaryConfig, DiaryPaths};
use crate::error::Result;
use crate::store::NoteStore;
use crate::users::{Account, UserDirectory};
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct DiaryApi {
    paths: DiaryPaths,
    config: DiaryConfig,
    users: UserDirectory,
    guest: NoteStore,
    account: Option<Account>,
}

impl DiaryApi {
    pub fn new(paths: DiaryPaths, config: DiaryConfig) -> Self {
        let users = UserDirectory::new(paths.users_file(&config), paths.data_dir.clone());
        Self {
            paths,
            config,
            users,
            guest: NoteStore::new(),
            account: None,
        }
    }

    pub fn add_note(&mut self, text: String, tags: Vec<String>) -> Result<CmdResult> {
        commands::add::run(self.store_mut(), text, tags)
    }

    pub fn delete_note(&mut self, index: usize) -> Result<CmdResult> {
        commands::delete::run(self.store_mut(), index)
    }

    pub fn edit_note(&mut self, index: usize, text: String, tags: Vec<String>) -> Result<CmdResult> {
        commands::edit::run(self.store_mut(), index, text, tags)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(self.store())
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Result<CmdResult> {
        commands::find::by_date(self.store(), date)
    }

    pub fn find_by_tag(&self, tag: &str) -> Result<CmdResult> {
        commands::find::by_tag(self.store(), tag)
    }

    pub fn find_by_text(&self, substring: &str) -> Result<CmdResult> {
        commands::find::by_text(self.store(), substring)
    }

    pub fn sort_by_date(&self) -> Result<CmdResult> {
        commands::sort::by_date(self.store())
    }

    pub fn sort_by_tags(&self) -> Result<CmdResult> {
        commands::sort::by_tags(self.store())
    }

    pub fn save(&self) -> Result<CmdResult> {
        persist::save(self.store(), &self.notes_path())
    }

    pub fn export(&self) -> Result<CmdResult> {
        persist::export(self.store(), &self.paths.export_file(&self.config))
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        let path = self.notes_path();
        persist::load(self.store_mut(), &path)
    }

    /// Creates an account and makes it the active session.
    pub fn register(&mut self, username: &str, password: &str) -> Result<CmdResult> {
        let (account, result) = commands::account::register(&self.users, username, password)?;
        Ok(self.switch_account(account, result))
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<CmdResult> {
        let (account, result) = commands::account::login(&self.users, username, password)?;
        Ok(self.switch_account(account, result))
    }

    pub fn logout(&mut self) -> Result<CmdResult> {
        Ok(match self.account.take() {
            Some(current) => commands::account::logout(current),
            None => CmdResult::default().with_message(CmdMessage::info("Not logged in.")),
        })
    }

    pub fn current_user(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.username.as_str())
    }

    /// File that save and load use for the active store.
    pub fn notes_path(&self) -> PathBuf {
        match &self.account {
            Some(account) => account.notes_path().to_path_buf(),
            None => self.paths.notes_file(&self.config),
        }
    }

    pub fn store(&self) -> &NoteStore {
        match &self.account {
            Some(account) => &account.notes,
            None => &self.guest,
        }
    }

    fn store_mut(&mut self) -> &mut NoteStore {
        match &mut self.account {
            Some(account) => &mut account.notes,
            None => &mut self.guest,
        }
    }

    fn switch_account(&mut self, account: Account, result: CmdResult) -> CmdResult {
        let mut messages = match self.account.replace(account) {
            Some(previous) => commands::account::logout(previous).messages,
            None => Vec::new(),
        };
        messages.extend(result.messages);
        CmdResult { messages, ..result }
    }
}
