//! Command words accepted at the command prompt.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prompt shown when waiting for a command word.
pub const COMMAND_PROMPT: &str = "Enter a command (add, list, find, delete, quit): ";

/// A recognized command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandWord {
    Add,
    List,
    Find,
    Delete,
    Quit,
}

impl CommandWord {
    pub const ALL: [CommandWord; 5] = [
        CommandWord::Add,
        CommandWord::List,
        CommandWord::Find,
        CommandWord::Delete,
        CommandWord::Quit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandWord::Add => "add",
            CommandWord::List => "list",
            CommandWord::Find => "find",
            CommandWord::Delete => "delete",
            CommandWord::Quit => "quit",
        }
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognized command word.
#[derive(Debug, Clone, Error)]
#[error("invalid command '{0}'")]
pub struct ParseCommandError(pub String);

impl FromStr for CommandWord {
    type Err = ParseCommandError;

    /// Matches the trimmed word exactly; `Add` and `LIST` are not commands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        CommandWord::ALL
            .into_iter()
            .find(|c| c.as_str() == word)
            .ok_or_else(|| ParseCommandError(word.to_string()))
    }
}
