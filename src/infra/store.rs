//! JSON file store for the note collection, with atomic writes.

use crate::domain::Note;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// Default file name for the note collection.
pub const DEFAULT_FILE_NAME: &str = "notes.json";

/// Errors while reading or writing the note collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corrupt note data in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode notes for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },
}

impl StoreError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path: path.into() },
            _ => StoreError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// Returns true if the backing file exists but does not hold a valid collection.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}

/// The note collection backed by a single JSON file.
///
/// Every operation reads or writes the whole file; nothing is cached between
/// calls. A missing file reads as an empty collection.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Creates a store backed by the file at `path`. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the file exists but is not a JSON array
    /// of notes. Returns `StoreError::Io` or `StoreError::PermissionDenied` if
    /// the file cannot be read.
    pub fn load(&self) -> Result<Vec<Note>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "notes file missing, using empty collection");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::from_io(&self.path, e)),
        };

        let notes: Vec<Note> =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(path = %self.path.display(), count = notes.len(), "loaded notes");
        Ok(notes)
    }

    /// Replaces the file contents with `notes` as pretty-printed JSON.
    ///
    /// Writes to a temporary file in the same directory and renames it over
    /// the target, so a failed save leaves the previous contents intact.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ParentNotFound` if the parent directory doesn't exist.
    /// Returns `StoreError::AtomicWrite` if the rename fails.
    pub fn save(&self, notes: &[Note]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(notes).map_err(|e| StoreError::Encode {
            path: self.path.clone(),
            source: e,
        })?;
        self.write_atomic(content.as_bytes())?;
        debug!(path = %self.path.display(), count = notes.len(), "saved notes");
        Ok(())
    }

    /// Creates the backing file as an empty array if it does not exist yet,
    /// creating parent directories as needed. Never touches an existing file.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.parent_dir() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::from_io(parent, e))?;
        }

        self.write_atomic(b"[]")?;
        debug!(path = %self.path.display(), "initialized empty notes file");
        Ok(())
    }

    /// Parent directory of the backing file, or None for a bare file name.
    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let parent = self.parent_dir().unwrap_or_else(|| Path::new("."));

        if !parent.exists() {
            return Err(StoreError::ParentNotFound {
                path: parent.into(),
            });
        }

        let mut temp =
            NamedTempFile::new_in(parent).map_err(|e| StoreError::from_io(&self.path, e))?;

        temp.write_all(bytes)
            .map_err(|e| StoreError::from_io(&self.path, e))?;

        temp.persist(&self.path)
            .map_err(|e| StoreError::AtomicWrite {
                path: self.path.clone(),
                source: e.error,
            })?;

        Ok(())
    }
}
