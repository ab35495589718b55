use clap::Parser;
use diary::error::{DiaryError, Result};
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the platform data directory.
pub const HOME_ENV: &str = "DIARY_HOME";

/// Returns the version string, with the git hash appended for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "diary", bin_name = "diary", version = get_version())]
#[command(about = "A personal diary of short, tagged notes", long_about = None)]
pub struct Cli {
    /// Directory holding notes, accounts and config.json
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// `--dir` wins over `DIARY_HOME`, which wins over the platform data dir.
pub fn resolve_data_dir(flag: Option<PathBuf>, env: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = env.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "diary", "diary")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DiaryError::Config("Could not determine data directory".to_string()))
}

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init()
        .ok();
}
