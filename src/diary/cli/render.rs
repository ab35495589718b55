use colored::Colorize;
use diary::commands::{CmdMessage, CmdResult, DisplayNote, MessageLevel};
use diary::error::DiaryError;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::menu::MenuItem;

const TEXT_WIDTH: usize = 60;
const INDEX_WIDTH: usize = 5;

pub(super) fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    write_notes(out, &result.listed_notes)?;
    write_messages(out, &result.messages)
}

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub(super) fn write_error<W: Write>(out: &mut W, error: &DiaryError) -> io::Result<()> {
    write_messages(out, &[CmdMessage::error(error.to_string())])
}

pub(super) fn write_notes<W: Write>(out: &mut W, notes: &[DisplayNote]) -> io::Result<()> {
    for dn in notes {
        writeln!(out, "{}", format_note(dn))?;
    }
    Ok(())
}

pub(super) fn write_menu<W: Write>(out: &mut W, user: Option<&str>) -> io::Result<()> {
    let who = user.unwrap_or("guest");
    writeln!(out)?;
    writeln!(out, "{} {}", "Diary".bold(), format!("({})", who).dimmed())?;
    for item in MenuItem::ALL {
        writeln!(out, "{:>4}. {}", item.number(), item.label())?;
    }
    Ok(())
}

/// One line per note: position (when known), date, text, then tags.
fn format_note(dn: &DisplayNote) -> String {
    let idx = match dn.index {
        Some(i) => format!("{}.", i),
        None => "-".to_string(),
    };
    let text = truncate_to_width(&dn.note.text.replace('\n', " "), TEXT_WIDTH);
    let padding = TEXT_WIDTH.saturating_sub(text.width());
    let tags = dn
        .note
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{} {} {}{} {}",
        format!("{:>width$}", idx, width = INDEX_WIDTH).yellow(),
        dn.note.date.to_string().dimmed(),
        text,
        " ".repeat(padding),
        tags.cyan()
    )
    .trim_end()
    .to_string()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
