//! Builder for test notes with sensible defaults.

use chrono::{DateTime, Utc};
use jot::domain::{Note, NoteId};

/// Builder for creating test notes with sensible defaults.
///
/// The id defaults to 1 and the creation time to a fixed instant, with a
/// fluent API for the remaining fields.
#[derive(Debug, Clone)]
pub struct TestNote {
    id: u64,
    title: String,
    content: String,
    tags: Vec<String>,
    created_at: Option<DateTime<Utc>>,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: 1,
            content: format!("{} content", title),
            title,
            tags: Vec::new(),
            created_at: Some(fixed_time()),
        }
    }

    /// Sets an explicit id for the note.
    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Sets the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Drops the creation time, like notes written by the content-only format.
    pub fn without_timestamp(mut self) -> Self {
        self.created_at = None;
        self
    }

    /// Returns the title.
    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// Converts to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::new(
            NoteId::new(self.id).expect("Invalid NoteId"),
            self.title.clone(),
            self.content.clone(),
            self.tags.clone(),
            self.created_at,
        )
    }
}

fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Sample").to_note();
        assert_eq!(note.id().get(), 1);
        assert_eq!(note.title(), "Sample");
        assert_eq!(note.content(), "Sample content");
        assert!(note.tags().is_empty());
        assert!(note.created_at().is_some());
    }

    #[test]
    fn test_note_builder_methods() {
        let note = TestNote::new("Trip")
            .id(4)
            .content("Went to the lake")
            .tag("travel")
            .tag("Outdoors")
            .without_timestamp()
            .to_note();
        assert_eq!(note.id().get(), 4);
        assert_eq!(note.content(), "Went to the lake");
        assert_eq!(note.tags(), ["travel", "Outdoors"]);
        assert!(note.created_at().is_none());
    }
}
