//! # CLI Layer
//!
//! This module is **one possible front-end** for clientbook. It plays the part a web view
//! would: it owns the draft form, the confirmation before a delete, and all rendering.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Installs the logging subscriber
//!
//! ## One-Shot and Session Modes
//!
//! Records only live as long as the process, so the natural way to use clientbook is the
//! interactive session: `clientbook` with no subcommand reads commands line by line
//! against one store. A subcommand (`clientbook list -s dil`) runs once against a fresh
//! session and exits, which is handy for scripts and for a quick look at the sample data.
//!
//! Handlers read through `LineInput` and write to any `Write`. On a terminal, lines come
//! from a rustyline editor with history; piped input and tests use a plain `BufRead`.
//!
//! ## Module Structure
//!
//! - `args`: clap definitions for the process arguments and for session lines
//! - `commands`: context setup and per-command handlers calling the API
//! - `input`: line sources (terminal editor or buffered reader)
//! - `session`: the read-eval-print loop
//! - `print`: output formatting (rows, details, tiles, messages)
//! - `words`: quote-aware splitting of session lines

mod args;
mod commands;
mod input;
mod print;
mod session;
mod words;

use args::{Cli, Commands};
use clap::Parser;
use clientbook::config::ClientbookConfig;
use clientbook::error::Result;
use clientbook::logging;
use commands::{execute, AppContext};
use input::{EditorInput, LineInput, ReaderInput};
use std::io::{self, IsTerminal, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config_dir.clone().or_else(ClientbookConfig::default_dir) {
        Some(dir) => ClientbookConfig::load(dir)?,
        None => ClientbookConfig::default(),
    };
    logging::init(cli.verbose, config.log_level.as_deref());

    let mut ctx = AppContext::new(&cli, &config)?;
    let mut out = io::stdout().lock();

    if io::stdin().is_terminal() {
        let mut input = EditorInput::new()?;
        dispatch(&mut ctx, cli.command, &mut input, &mut out)
    } else {
        let mut input = ReaderInput::new(io::stdin().lock());
        dispatch(&mut ctx, cli.command, &mut input, &mut out)
    }
}

fn dispatch<L: LineInput, W: Write>(
    ctx: &mut AppContext,
    command: Option<Commands>,
    input: &mut L,
    out: &mut W,
) -> Result<()> {
    match command {
        Some(command) => execute(ctx, command, input, out),
        None => session::run(ctx, input, out),
    }
}
