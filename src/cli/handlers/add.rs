//! Add command handler.

use anyhow::Result;
use std::io::Write;
use tracing::info;

use super::{
    ADDED_MESSAGE, CONTENT_PROMPT, Context, Outcome, TAGS_PROMPT, TITLE_PROMPT, ask_line,
};
use crate::cli::session::Prompt;
use crate::domain::Note;

/// Prompts for title, content and tags, then appends the new note.
///
/// Nothing is saved if input ends before all three answers are given.
pub fn handle_add(ctx: &Context, prompt: &mut dyn Prompt, out: &mut dyn Write) -> Result<Outcome> {
    let mut notes = ctx.load_notes()?;

    let Some(title) = ask_line(prompt, TITLE_PROMPT)? else {
        return Ok(Outcome::InputClosed);
    };
    let Some(content) = ask_line(prompt, CONTENT_PROMPT)? else {
        return Ok(Outcome::InputClosed);
    };
    let Some(tags) = ask_line(prompt, TAGS_PROMPT)? else {
        return Ok(Outcome::InputClosed);
    };

    let note = Note::create(&notes, &title, &content, &tags);
    notes.push(note.clone());
    ctx.save_notes(&notes)?;

    info!(id = %note.id(), total = notes.len(), "added note");
    ctx.renderer.message(out, ADDED_MESSAGE)?;

    Ok(Outcome::Added(note))
}
