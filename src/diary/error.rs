use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiaryError {
    #[error("Note {index} not found (diary has {len} notes)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Malformed data in {}: {reason}", .path.display())]
    MalformedData { path: PathBuf, reason: String },

    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DiaryError>;
