//! List command handler.

use anyhow::Result;
use std::io::Write;

use super::{Context, Outcome};

pub fn handle_list(ctx: &Context, out: &mut dyn Write) -> Result<Outcome> {
    let notes = ctx.load_notes()?;
    let all: Vec<_> = notes.iter().collect();

    ctx.renderer.render_listing(out, &all)?;

    Ok(Outcome::Listed { total: notes.len() })
}
