use crate::error::{DiaryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_NOTES_FILE: &str = "notes.json";
const DEFAULT_EXPORT_FILE: &str = "notes.csv";
const DEFAULT_USERS_FILE: &str = "users.json";

/// Configuration for the diary, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiaryConfig {
    /// Note file used when nobody is logged in
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Target of the tabular export
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Username -> password map
    #[serde(default = "default_users_file")]
    pub users_file: String,
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_users_file() -> String {
    DEFAULT_USERS_FILE.to_string()
}

impl Default for DiaryConfig {
    fn default() -> Self {
        Self {
            notes_file: default_notes_file(),
            export_file: default_export_file(),
            users_file: default_users_file(),
        }
    }
}

impl DiaryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DiaryError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| DiaryError::Config(format!("{}: {}", config_path.display(), e)))
    }
}

/// Where the diary keeps its files.
#[derive(Debug, Clone)]
pub struct DiaryPaths {
    pub data_dir: PathBuf,
}

impl DiaryPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn notes_file(&self, config: &DiaryConfig) -> PathBuf {
        self.data_dir.join(&config.notes_file)
    }

    pub fn export_file(&self, config: &DiaryConfig) -> PathBuf {
        self.data_dir.join(&config.export_file)
    }

    pub fn users_file(&self, config: &DiaryConfig) -> PathBuf {
        self.data_dir.join(&config.users_file)
    }
}
