//! Delete command handler.

use anyhow::Result;
use std::io::Write;
use tracing::info;

use super::{Context, DELETE_PROMPT, DELETED_MESSAGE, NOT_FOUND_MESSAGE, Outcome, ask_line};
use crate::cli::session::Prompt;
use crate::domain::{Note, NoteId};

/// Prompts for an id and removes the first note carrying it.
///
/// Input that is not a positive integer can never equal an id, so it is
/// reported the same way as an id that is absent.
pub fn handle_delete(
    ctx: &Context,
    prompt: &mut dyn Prompt,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let mut notes = ctx.load_notes()?;

    let Some(input) = ask_line(prompt, DELETE_PROMPT)? else {
        return Ok(Outcome::InputClosed);
    };

    let Some(position) = position_of(&notes, &input) else {
        info!(input = %input.trim(), "no note with that id");
        ctx.renderer.message(out, NOT_FOUND_MESSAGE)?;
        return Ok(Outcome::NotFound { input });
    };

    let removed = notes.remove(position);
    ctx.save_notes(&notes)?;

    info!(id = %removed.id(), remaining = notes.len(), "deleted note");
    ctx.renderer.message(out, DELETED_MESSAGE)?;

    Ok(Outcome::Deleted(removed))
}

/// Index of the first note whose id equals the parsed input.
pub(crate) fn position_of(notes: &[Note], input: &str) -> Option<usize> {
    let id = input.parse::<NoteId>().ok()?;
    notes.iter().position(|n| n.id() == id)
}
