use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Separator used whenever tags are flattened into a single string.
pub const TAG_SEPARATOR: &str = ", ";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single diary entry.
///
/// Notes carry no id of their own: a note is addressed by its position in the
/// [`NoteStore`](crate::store::NoteStore) that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Creation day, serialized as `YYYY-MM-DD`
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
}

impl Note {
    /// Creates a note stamped with today's local date.
    pub fn new(text: impl Into<String>, tags: Vec<String>) -> Self {
        Self::with_date(text, tags, today())
    }

    pub fn with_date(text: impl Into<String>, tags: Vec<String>, date: NaiveDate) -> Self {
        Self {
            text: text.into(),
            tags,
            date,
        }
    }

    pub fn joined_tags(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }

    /// Case-insensitive exact match against any of the note's tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Splits a user-entered, comma separated tag list. Blank entries are dropped.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a day written exactly as `YYYY-MM-DD`.
///
/// chrono alone accepts unpadded fields and leading whitespace, so the parsed
/// day must print back to the same text.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == input)
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid date {raw:?}, expected YYYY-MM-DD"))
    })
}

/// Tags are written as an array, but files produced by the older flat format
/// hold them as one `", "`-joined string. Both are accepted on read.
fn deserialize_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Tags::deserialize(deserializer)? {
        Tags::List(tags) => tags,
        Tags::Joined(joined) if joined.is_empty() => Vec::new(),
        Tags::Joined(joined) => joined.split(TAG_SEPARATOR).map(String::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn new_note_is_stamped_today() {
        let note = Note::new("Первая заметка", vec!["Работа".into()]);
        assert_eq!(note.date, today());
    }

    #[test]
    fn has_tag_ignores_case_but_not_prefixes() {
        let note = Note::new("x", vec!["Работа".into(), "Важное".into()]);
        assert!(note.has_tag("работа"));
        assert!(note.has_tag("ВАЖНОЕ"));
        assert!(!note.has_tag("Работать"));
        assert!(!note.has_tag("раб"));
    }

    #[test]
    fn joined_tags_uses_comma_space() {
        let note = Note::new("x", vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(note.joined_tags(), "a, b, a");
    }

    #[test]
    fn parse_tags_trims_and_drops_blanks() {
        assert_eq!(
            parse_tags(" Хобби, Развлечение ,, "),
            vec!["Хобби".to_string(), "Развлечение".to_string()]
        );
        assert!(parse_tags("   ").is_empty());
    }

    #[test]
    fn serializes_date_as_iso_day() {
        let note = Note::with_date("t", vec!["x".into()], date("2025-03-06"));
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["date"], "2025-03-06");
        assert_eq!(json["tags"], serde_json::json!(["x"]));
    }

    #[test]
    fn reads_joined_tag_string() {
        let json = r#"{"text":"t","tags":"работа, Важное","date":"2025-03-06"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.tags, vec!["работа".to_string(), "Важное".to_string()]);

        let json = r#"{"text":"t","tags":"","date":"2025-03-06"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert!(note.tags.is_empty());
    }

    #[test]
    fn rejects_bad_dates() {
        for bad in ["06.03.2025", "2025-3-6", " 2025-03-06", "2025-03-06 ", "2025-02-30"] {
            let json = format!(r#"{{"text":"t","tags":[],"date":"{bad}"}}"#);
            assert!(serde_json::from_str::<Note>(&json).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_date_wants_padded_iso_day() {
        assert_eq!(parse_date("2025-03-06"), Some(date("2025-03-06")));
        assert_eq!(parse_date("2025-3-6"), None);
        assert_eq!(parse_date(" 2025-03-06"), None);
        assert_eq!(parse_date("2025-03-6 "), None);
    }
}
