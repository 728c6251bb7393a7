//! jot - short notes kept in a JSON file, driven by interactive prompts

pub mod cli;
pub mod domain;
pub mod infra;
pub mod query;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli,
    config::Config,
    handlers::{Context, Outcome, run_session},
    output::{OutputFormat, Renderer},
    session::Session,
};
use infra::NoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<Outcome> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let store = NoteStore::new(config.notes_file(cli.file.as_ref()));
    store
        .ensure_exists()
        .with_context(|| format!("failed to initialize {}", store.path().display()))?;
    debug!(path = %store.path().display(), "using notes file");

    let renderer = Renderer::new(cli.format, config.color(cli.no_color));
    let ctx = Context::new(store, renderer);

    // Keep prompts off stdout when it carries JSON.
    let prompt_out: Box<dyn Write> = match cli.format {
        OutputFormat::Human => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    let mut session = Session::open(io::stdin().lock(), prompt_out);
    let mut stdout = io::stdout();

    let outcome = run_session(
        &ctx,
        &mut session,
        &mut stdout,
        cli.command.as_deref(),
        cli.menu,
    )?;

    session.close()?;
    stdout.flush()?;
    debug!(?outcome, "session closed");
    Ok(outcome)
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the level from `warn`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jot={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}
