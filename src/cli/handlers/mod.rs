//! Command handlers and the dispatch loop.

mod add;
mod delete;
mod find;
mod list;


use anyhow::{Context as _, Result};
use std::io::Write;
use tracing::{debug, info};

use super::command::{COMMAND_PROMPT, CommandWord};
use super::output::Renderer;
use super::session::{Prompt, SessionError};
use crate::domain::Note;
use crate::infra::NoteStore;

pub use add::handle_add;
pub use delete::handle_delete;
pub use find::handle_find;
pub use list::handle_list;

pub(crate) const TITLE_PROMPT: &str = "Enter title: ";
pub(crate) const CONTENT_PROMPT: &str = "Enter note: ";
pub(crate) const TAGS_PROMPT: &str = "Enter tags (comma separated): ";
pub(crate) const QUERY_PROMPT: &str = "Enter search query: ";
pub(crate) const DELETE_PROMPT: &str = "Enter note id to delete: ";

pub(crate) const ADDED_MESSAGE: &str = "Note added successfully!";
pub(crate) const DELETED_MESSAGE: &str = "Note deleted successfully!";
pub(crate) const NOT_FOUND_MESSAGE: &str = "Note not found.";
pub(crate) const INVALID_COMMAND_MESSAGE: &str = "Invalid command.";

/// Everything a command needs besides the session and the output stream.
#[derive(Debug, Clone)]
pub struct Context {
    pub store: NoteStore,
    pub renderer: Renderer,
}

impl Context {
    pub fn new(store: NoteStore, renderer: Renderer) -> Self {
        Self { store, renderer }
    }

    /// Loads the collection, naming the file on failure.
    pub(crate) fn load_notes(&self) -> Result<Vec<Note>> {
        self.store
            .load()
            .with_context(|| format!("failed to load notes from {}", self.store.path().display()))
    }

    /// Saves the collection, naming the file on failure.
    pub(crate) fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.store
            .save(notes)
            .with_context(|| format!("failed to save notes to {}", self.store.path().display()))
    }
}

/// How a command ended. Every variant is a normal exit.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Note),
    Listed { total: usize },
    Found { matches: usize },
    Deleted(Note),
    NotFound { input: String },
    InvalidCommand { word: String },
    Quit,
    /// Input ended at a prompt; nothing was changed.
    InputClosed,
}

impl Outcome {
    /// Returns true if no further command should be read.
    pub fn ends_session(&self) -> bool {
        matches!(self, Outcome::Quit | Outcome::InputClosed)
    }
}

/// Asks for a line, mapping end of input to `None`.
pub(crate) fn ask_line(prompt: &mut dyn Prompt, text: &str) -> Result<Option<String>> {
    match prompt.ask(text) {
        Ok(line) => Ok(Some(line)),
        Err(SessionError::EndOfInput) => {
            debug!(prompt = text.trim_end(), "input closed at prompt");
            Ok(None)
        }
        Err(e) => Err(e).context("failed to read input"),
    }
}

/// Runs one command.
///
/// When `word` is given it is used instead of asking for a command.
pub fn dispatch(
    ctx: &Context,
    prompt: &mut dyn Prompt,
    out: &mut dyn Write,
    word: Option<&str>,
) -> Result<Outcome> {
    let word = match word {
        Some(w) => w.to_string(),
        None => match ask_line(prompt, COMMAND_PROMPT)? {
            Some(line) => line,
            None => return Ok(Outcome::InputClosed),
        },
    };

    let command = match word.parse::<CommandWord>() {
        Ok(command) => command,
        Err(err) => {
            info!(word = %err.0, "invalid command");
            ctx.renderer.message(out, INVALID_COMMAND_MESSAGE)?;
            return Ok(Outcome::InvalidCommand { word: err.0 });
        }
    };

    debug!(%command, "dispatching");
    match command {
        CommandWord::Add => handle_add(ctx, prompt, out),
        CommandWord::List => handle_list(ctx, out),
        CommandWord::Find => handle_find(ctx, prompt, out),
        CommandWord::Delete => handle_delete(ctx, prompt, out),
        CommandWord::Quit => Ok(Outcome::Quit),
    }
}

/// Runs commands until the session should close.
///
/// Without `menu` exactly one command runs. With `menu` the command prompt
/// returns after each command until `quit` or end of input. Returns the
/// outcome of the last command.
pub fn run_session(
    ctx: &Context,
    prompt: &mut dyn Prompt,
    out: &mut dyn Write,
    first_word: Option<&str>,
    menu: bool,
) -> Result<Outcome> {
    let mut word = first_word;
    loop {
        let outcome = dispatch(ctx, prompt, out, word.take())?;
        if !menu || outcome.ends_session() {
            return Ok(outcome);
        }
    }
}
