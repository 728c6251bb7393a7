//! Output formats and note rendering for the terminal.

use clap::ValueEnum;
use console::Style;
use serde::Serialize;
use std::io::{self, Write};

use crate::domain::{Note, is_blank};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Full listing with its count.
#[derive(Debug, Serialize)]
pub struct NoteListing<'a> {
    pub total: usize,
    pub notes: &'a [&'a Note],
}

/// Renders notes and status messages.
///
/// Rendering never changes what is stored; it only decides how a note looks.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    color: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Renders the whole collection, preceded by its size.
    pub fn render_listing(&self, out: &mut dyn Write, notes: &[&Note]) -> io::Result<()> {
        match self.format {
            OutputFormat::Human => {
                writeln!(out, "Total notes: {}", notes.len())?;
                for note in notes {
                    self.render_note(out, note)?;
                }
                Ok(())
            }
            OutputFormat::Json => write_json(
                out,
                &Output::new(NoteListing {
                    total: notes.len(),
                    notes,
                }),
            ),
        }
    }

    /// Renders search matches. No matches renders nothing in human form.
    pub fn render_matches(&self, out: &mut dyn Write, notes: &[&Note]) -> io::Result<()> {
        match self.format {
            OutputFormat::Human => {
                for note in notes {
                    self.render_note(out, note)?;
                }
                Ok(())
            }
            OutputFormat::Json => write_json(out, &Output::new(notes)),
        }
    }

    /// Renders a single note in human form:
    ///
    /// ```text
    /// #1 Trip  2024-01-15 10:30
    ///   Went to the lake
    ///   tags: travel, Outdoors
    /// ```
    pub fn render_note(&self, out: &mut dyn Write, note: &Note) -> io::Result<()> {
        let id_style = Style::new().cyan().bold().force_styling(self.color);
        let title_style = Style::new().bold().force_styling(self.color);
        let dim = Style::new().dim().force_styling(self.color);
        let tag_style = Style::new().yellow().force_styling(self.color);

        let mut header = id_style.apply_to(format!("#{}", note.id())).to_string();
        if !note.title().is_empty() {
            header.push(' ');
            header.push_str(&title_style.apply_to(note.title()).to_string());
        }
        if let Some(created) = note.created_at() {
            header.push_str("  ");
            header.push_str(
                &dim.apply_to(created.format("%Y-%m-%d %H:%M"))
                    .to_string(),
            );
        }
        writeln!(out, "{}", header)?;

        for line in note.content().lines() {
            writeln!(out, "  {}", line)?;
        }

        if !is_blank(note.tags()) {
            let tags: Vec<String> = note
                .tags()
                .iter()
                .filter(|t| !t.is_empty())
                .map(|t| tag_style.apply_to(t).to_string())
                .collect();
            writeln!(out, "  {} {}", dim.apply_to("tags:"), tags.join(", "))?;
        }

        Ok(())
    }

    /// Writes a one-line status message.
    pub fn message(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "{}", message)
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
