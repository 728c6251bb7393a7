//! CLI definitions: arguments, session, dispatch and output

pub mod command;
pub mod config;
pub mod handlers;
pub mod output;
pub mod session;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use output::OutputFormat;

/// notes - append, list, search and delete short notes
///
/// Asks for one command (add, list, find, delete, quit) and the details it
/// needs, then exits.
#[derive(Parser, Debug)]
#[command(name = "notes", version, about, long_about = None)]
pub struct Cli {
    /// Command word to run instead of asking for one
    pub command: Option<String>,

    /// Notes file (overrides config file)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Output format for list and find
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Keep asking for commands until quit or end of input
    #[arg(short, long)]
    pub menu: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
