use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::users::{Account, UserDirectory};

pub fn register(
    users: &UserDirectory,
    username: &str,
    password: &str,
) -> Result<(Account, CmdResult)> {
    let account = users.register(username, password)?;
    let result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Account {} created. You are logged in.",
        account.username
    )));
    Ok((account, result))
}

pub fn login(
    users: &UserDirectory,
    username: &str,
    password: &str,
) -> Result<(Account, CmdResult)> {
    let account = users.login(username, password)?;
    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Logged in as {}.",
        account.username
    )));
    if account.notes_path().exists() {
        result.add_message(CmdMessage::info("Use load to open your saved notes."));
    }
    Ok((account, result))
}

/// Ends the session. Notes that were not saved are dropped.
pub fn logout(account: Account) -> CmdResult {
    let mut result = CmdResult::default();
    if !account.notes.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Dropped {} notes from memory. Anything not saved is gone.",
            account.notes.len()
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Logged out {}.",
        account.username
    )));
    result
}
