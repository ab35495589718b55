//! The numbered menu loop.
//!
//! Every choice maps to one [`DiaryApi`] call. Errors from the library are
//! rendered and the menu comes back; bad input (a non-number, a malformed date)
//! gets a message and no API call. End of input behaves like "Exit".

use super::render::{write_error, write_menu, write_messages, write_result};
use chrono::NaiveDate;
use diary::api::DiaryApi;
use diary::commands::{CmdMessage, CmdResult};
use diary::error::{DiaryError, Result};
use diary::model::{parse_date, parse_tags};
use log::debug;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Add,
    Delete,
    Edit,
    FindByDate,
    FindByTag,
    FindByText,
    SortByDate,
    SortByTags,
    List,
    Save,
    Export,
    Load,
    Register,
    Login,
    Logout,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 16] = [
        MenuItem::Add,
        MenuItem::Delete,
        MenuItem::Edit,
        MenuItem::FindByDate,
        MenuItem::FindByTag,
        MenuItem::FindByText,
        MenuItem::SortByDate,
        MenuItem::SortByTags,
        MenuItem::List,
        MenuItem::Save,
        MenuItem::Export,
        MenuItem::Load,
        MenuItem::Register,
        MenuItem::Login,
        MenuItem::Logout,
        MenuItem::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuItem::Exit => 0,
            item => Self::ALL.iter().position(|i| *i == item).map_or(0, |p| p as u8 + 1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Add => "Add note",
            MenuItem::Delete => "Delete note",
            MenuItem::Edit => "Edit note",
            MenuItem::FindByDate => "Find by date",
            MenuItem::FindByTag => "Find by tag",
            MenuItem::FindByText => "Find by text",
            MenuItem::SortByDate => "Sort by date",
            MenuItem::SortByTags => "Sort by tags",
            MenuItem::List => "List notes",
            MenuItem::Save => "Save",
            MenuItem::Export => "Export table",
            MenuItem::Load => "Load",
            MenuItem::Register => "Register",
            MenuItem::Login => "Login",
            MenuItem::Logout => "Logout",
            MenuItem::Exit => "Exit",
        }
    }

    pub fn from_choice(choice: &str) -> Option<Self> {
        let number: u8 = choice.trim().parse().ok()?;
        Self::ALL.into_iter().find(|item| item.number() == number)
    }
}

enum Step {
    Show(CmdResult),
    Exit,
}

pub struct Menu<'a, R, W> {
    api: &'a mut DiaryApi,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(api: &'a mut DiaryApi, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub fn run(mut self) -> Result<()> {
        loop {
            write_menu(&mut self.out, self.api.current_user())?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                break;
            };
            let Some(item) = MenuItem::from_choice(&choice) else {
                self.say(CmdMessage::warning(format!("Unknown choice: {}", choice.trim())))?;
                continue;
            };
            debug!("menu choice {:?}", item);

            match self.handle(item) {
                Ok(Step::Show(result)) => write_result(&mut self.out, &result)?,
                Ok(Step::Exit) => break,
                Err(e) => write_error(&mut self.out, &e)?,
            }
        }
        writeln!(self.out, "Bye.")?;
        self.out.flush()?;
        Ok(())
    }

    fn handle(&mut self, item: MenuItem) -> Result<Step> {
        let result = match item {
            MenuItem::Add => {
                let Some(text) = self.prompt("Text: ")? else {
                    return Ok(Step::Exit);
                };
                let Some(tags) = self.prompt("Tags (comma separated): ")? else {
                    return Ok(Step::Exit);
                };
                self.api.add_note(text, parse_tags(&tags))?
            }
            MenuItem::Delete => match self.prompt_index()? {
                Input::Value(index) => self.api.delete_note(index)?,
                Input::Invalid(msg) => invalid(msg),
                Input::Eof => return Ok(Step::Exit),
            },
            MenuItem::Edit => {
                let index = match self.prompt_index()? {
                    Input::Value(index) => index,
                    Input::Invalid(msg) => return Ok(Step::Show(invalid(msg))),
                    Input::Eof => return Ok(Step::Exit),
                };
                let Some(text) = self.prompt("New text: ")? else {
                    return Ok(Step::Exit);
                };
                let Some(tags) = self.prompt("New tags (comma separated): ")? else {
                    return Ok(Step::Exit);
                };
                self.api.edit_note(index, text, parse_tags(&tags))?
            }
            MenuItem::FindByDate => match self.prompt_date()? {
                Input::Value(date) => self.api.find_by_date(date)?,
                Input::Invalid(msg) => invalid(msg),
                Input::Eof => return Ok(Step::Exit),
            },
            MenuItem::FindByTag => {
                let Some(tag) = self.prompt("Tag: ")? else {
                    return Ok(Step::Exit);
                };
                self.api.find_by_tag(tag.trim())?
            }
            MenuItem::FindByText => {
                let Some(text) = self.prompt("Text contains: ")? else {
                    return Ok(Step::Exit);
                };
                self.api.find_by_text(&text)?
            }
            MenuItem::SortByDate => self.api.sort_by_date()?,
            MenuItem::SortByTags => self.api.sort_by_tags()?,
            MenuItem::List => self.api.list_notes()?,
            MenuItem::Save => self.api.save()?,
            MenuItem::Export => self.api.export()?,
            MenuItem::Load => self.api.load()?,
            MenuItem::Register | MenuItem::Login => {
                let Some(username) = self.prompt("Username: ")? else {
                    return Ok(Step::Exit);
                };
                let Some(password) = self.prompt("Password: ")? else {
                    return Ok(Step::Exit);
                };
                let username = username.trim();
                if item == MenuItem::Register {
                    self.api.register(username, &password)?
                } else {
                    self.api.login(username, &password)?
                }
            }
            MenuItem::Logout => self.api.logout()?,
            MenuItem::Exit => return Ok(Step::Exit),
        };
        Ok(Step::Show(result))
    }

    /// Reads one line without its line ending; `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(DiaryError::Io)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt_index(&mut self) -> Result<Input<usize>> {
        Ok(match self.prompt("Note number: ")? {
            None => Input::Eof,
            Some(raw) => match raw.trim().parse() {
                Ok(index) => Input::Value(index),
                Err(_) => Input::Invalid(format!("Not a note number: {}", raw.trim())),
            },
        })
    }

    fn prompt_date(&mut self) -> Result<Input<NaiveDate>> {
        Ok(match self.prompt("Date (YYYY-MM-DD): ")? {
            None => Input::Eof,
            Some(raw) => match parse_date(raw.trim()) {
                Some(date) => Input::Value(date),
                None => Input::Invalid(format!("Not a date: {}", raw.trim())),
            },
        })
    }

    fn say(&mut self, message: CmdMessage) -> Result<()> {
        write_messages(&mut self.out, &[message])?;
        Ok(())
    }
}

enum Input<T> {
    Value(T),
    Invalid(String),
    Eof,
}

fn invalid(message: String) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::error(message))
}
