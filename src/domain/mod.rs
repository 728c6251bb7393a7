//! Core types: Note, NoteId, tag parsing

mod note;
mod note_id;
mod tag;

pub use note::Note;
pub use note_id::{NoteId, ParseNoteIdError};
pub use tag::{is_blank, parse_tags, tag_contains};
