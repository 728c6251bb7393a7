//! Free-text filtering of a note collection.
//!
//! A query matches a note when any one of these holds:
//! - the query equals the title, ignoring case;
//! - the content contains the lower-cased query (the content itself is
//!   compared as stored, so `"Lake"` in content is not found by any query);
//! - some tag contains the query, ignoring case.
//!
//! Results keep collection order. There is no ranking.

use crate::domain::{Note, tag_contains};

/// Returns the notes matching `query`, in collection order.
///
/// An empty query returns every note.
///
/// # Examples
///
/// ```
/// use jot::domain::Note;
/// use jot::query::find;
///
/// let notes = vec![Note::create(&[], "Trip", "Went to the lake", "travel, Outdoors")];
/// assert_eq!(find(&notes, "TRIP").len(), 1);
/// assert_eq!(find(&notes, "outdoors").len(), 1);
/// assert!(find(&notes, "beach").is_empty());
/// ```
pub fn find<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note_matches(note, &needle))
        .collect()
}

/// Checks a single note against an already lower-cased query.
fn note_matches(note: &Note, needle: &str) -> bool {
    title_matches(note.title(), needle)
        || content_matches(note.content(), needle)
        || note.tags().iter().any(|tag| tag_contains(tag, needle))
}

fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase() == needle
}

fn content_matches(content: &str, needle: &str) -> bool {
    content.contains(needle)
}
