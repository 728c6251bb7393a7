//! Note record and the id/timestamp assignment rule.

use crate::domain::{NoteId, parse_tags};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single persisted note.
///
/// The JSON shape is `{id, title, content, tags, createdAt}`. Files written by
/// older versions carry only `{id, content, tags}`; a missing title reads as
/// the empty string, and a missing `title` or `createdAt` stays absent when
/// re-saved. An empty title that was present is written back as `""`.
///
/// # Examples
///
/// ```
/// use jot::domain::Note;
///
/// let note = Note::create(&[], " Trip ", "Went to the lake ", "travel, Outdoors");
/// assert_eq!(note.id().get(), 1);
/// assert_eq!(note.title(), "Trip");
/// assert_eq!(note.content(), "Went to the lake");
/// assert_eq!(note.tags(), ["travel", "Outdoors"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    content: String,
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso_millis")]
    created_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Creates a note from already-normalized parts.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title: Some(title.into()),
            content: content.into(),
            tags,
            created_at,
        }
    }

    /// Builds the note that would be appended to `existing`, stamped now.
    ///
    /// The id is always `existing.len() + 1`, whatever ids the collection
    /// already holds.
    pub fn create(existing: &[Note], title: &str, content: &str, tags_input: &str) -> Self {
        Self::create_at(existing, title, content, tags_input, Utc::now())
    }

    /// Like [`Note::create`] with an explicit creation time.
    pub fn create_at(
        existing: &[Note],
        title: &str,
        content: &str,
        tags_input: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NoteId::next_for_len(existing.len()),
            title: Some(title.trim().to_string()),
            content: content.trim().to_string(),
            tags: parse_tags(tags_input),
            created_at: Some(now),
        }
    }

    /// Returns the note's id.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's title (empty when the note has none).
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the note's tags in input order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns when the note was created, if recorded.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.title() {
            "" => write!(f, "#{}", self.id),
            title => write!(f, "#{} {}", self.id, title),
        }
    }
}

/// `createdAt` as an ISO-8601 UTC string with millisecond precision,
/// e.g. `2024-01-15T10:30:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| serde::de::Error::custom(format!("invalid createdAt '{}': {}", s, e)))
        })
        .transpose()
    }
}
