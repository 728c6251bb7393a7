//! Find command handler.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use super::{Context, Outcome, QUERY_PROMPT, ask_line};
use crate::cli::session::Prompt;
use crate::query;

/// Prompts for a query and renders every matching note in collection order.
///
/// The query is used exactly as typed; an empty line lists everything.
pub fn handle_find(ctx: &Context, prompt: &mut dyn Prompt, out: &mut dyn Write) -> Result<Outcome> {
    let notes = ctx.load_notes()?;

    let Some(query_text) = ask_line(prompt, QUERY_PROMPT)? else {
        return Ok(Outcome::InputClosed);
    };

    let matches = query::find(&notes, &query_text);
    debug!(query = %query_text, matches = matches.len(), "search complete");

    ctx.renderer.render_matches(out, &matches)?;

    Ok(Outcome::Found {
        matches: matches.len(),
    })
}
