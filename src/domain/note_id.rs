//! Positive integer note identifier with parsing and serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// A note's numeric label.
///
/// Ids are assigned as `collection length + 1` when a note is added, so they
/// are positive but not guaranteed unique once notes have been deleted.
///
/// # Examples
///
/// ```
/// use jot::domain::NoteId;
///
/// let id: NoteId = " 3 ".parse().unwrap();
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.to_string(), "3");
/// assert!("0".parse::<NoteId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(NonZeroU64);

impl NoteId {
    /// Creates a NoteId from a raw value, rejecting zero.
    pub fn new(value: u64) -> Result<Self, ParseNoteIdError> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or_else(|| ParseNoteIdError {
                value: value.to_string(),
                reason: "ids start at 1".to_string(),
            })
    }

    /// Returns the id assigned to a note appended to a collection of `len` notes.
    pub fn next_for_len(len: usize) -> Self {
        let next = NonZeroU64::MIN.saturating_add(len as u64);
        Self(next)
    }

    /// Returns the raw numeric value.
    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    /// Parses a decimal id, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed.parse::<u64>().map_err(|e| ParseNoteIdError {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Self::new(value)
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.0.get())
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
