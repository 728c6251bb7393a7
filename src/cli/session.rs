//! Interactive input session.
//!
//! A [`Session`] owns the input stream and the stream prompts are written to.
//! It is opened once per invocation, passed explicitly to every command, and
//! closed by consuming it.

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors while prompting the user.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input ended before a line was read.
    #[error("input closed")]
    EndOfInput,

    #[error("session I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Something that can ask the user for one line of text.
pub trait Prompt {
    /// Shows `prompt` and returns the reply without its line terminator.
    fn ask(&mut self, prompt: &str) -> Result<String, SessionError>;
}

/// A line-oriented session over a reader and a prompt writer.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Opens a session reading replies from `input` and writing prompts to `output`.
    pub fn open(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Closes the session, flushing pending prompt output, and returns the writer.
    pub fn close(mut self) -> Result<W, SessionError> {
        self.output.flush()?;
        Ok(self.output)
    }
}

impl<R: BufRead, W: Write> Prompt for Session<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }

        let reply = line.strip_suffix('\n').unwrap_or(&line);
        let reply = reply.strip_suffix('\r').unwrap_or(reply);
        Ok(reply.to_string())
    }
}
