//! File I/O for the note collection

mod store;

pub use store::{DEFAULT_FILE_NAME, NoteStore, StoreError};
