//! # Accounts
//!
//! A [`UserDirectory`] maps usernames to passwords in a single JSON object file
//! and hands out [`Account`]s, each bound to its own note file named
//! `<username>_notes.json` in the data directory.
//!
//! Passwords are stored and compared as plain text. The credentials file is
//! re-read on every `register` and `login`, so edits made by another process
//! are picked up, but nothing guards against two writers.

use crate::error::{DiaryError, Result};
use crate::store::fs::{read_file, write_file};
use crate::store::NoteStore;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

type Credentials = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub notes: NoteStore,
    notes_path: PathBuf,
}

impl Account {
    fn new(username: &str, password: &str, data_dir: &Path) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            notes: NoteStore::new(),
            notes_path: data_dir.join(notes_filename(username)),
        }
    }

    pub fn notes_path(&self) -> &Path {
        &self.notes_path
    }
}

pub fn notes_filename(username: &str) -> String {
    format!("{}_notes.json", username)
}

#[derive(Debug, Clone)]
pub struct UserDirectory {
    credentials_path: PathBuf,
    data_dir: PathBuf,
}

impl UserDirectory {
    pub fn new(credentials_path: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            data_dir: data_dir.into(),
        }
    }

    pub fn register(&self, username: &str, password: &str) -> Result<Account> {
        validate_username(username)?;
        let mut credentials = self.read_credentials()?;
        if credentials.contains_key(username) {
            warn!("registration refused, {} already exists", username);
            return Err(DiaryError::DuplicateAccount(username.to_string()));
        }

        credentials.insert(username.to_string(), password.to_string());
        self.write_credentials(&credentials)?;
        debug!("registered account {}", username);
        Ok(Account::new(username, password, &self.data_dir))
    }

    /// Checks the password and returns an account with an empty note store.
    /// Loading the user's notes is a separate, explicit step.
    pub fn login(&self, username: &str, password: &str) -> Result<Account> {
        if validate_username(username).is_err() {
            warn!("failed login for invalid username {:?}", username);
            return Err(DiaryError::InvalidCredentials);
        }
        let credentials = self.read_credentials()?;
        match credentials.get(username) {
            Some(stored) if stored == password => {
                debug!("logged in as {}", username);
                Ok(Account::new(username, password, &self.data_dir))
            }
            _ => {
                warn!("failed login for {}", username);
                Err(DiaryError::InvalidCredentials)
            }
        }
    }

    fn read_credentials(&self) -> Result<Credentials> {
        let content = match read_file(&self.credentials_path) {
            Ok(content) => content,
            Err(DiaryError::FileNotFound(_)) => return Ok(Credentials::new()),
            Err(e) => return Err(e),
        };
        serde_json::from_str(&content).map_err(|e| DiaryError::MalformedData {
            path: self.credentials_path.clone(),
            reason: e.to_string(),
        })
    }

    fn write_credentials(&self, credentials: &Credentials) -> Result<()> {
        let content =
            serde_json::to_string_pretty(credentials).map_err(DiaryError::Serialization)?;
        write_file(&self.credentials_path, &content)
    }
}

/// Usernames become part of a file name, so they must be a single path component.
fn validate_username(username: &str) -> Result<()> {
    let invalid = username.trim().is_empty()
        || username.contains(['/', '\\'])
        || username == "."
        || username == "..";
    if invalid {
        return Err(DiaryError::InvalidUsername(username.to_string()));
    }
    Ok(())
}
