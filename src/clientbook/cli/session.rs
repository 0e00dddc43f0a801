use super::args::{SessionCommand, SessionLine};
use super::commands::{execute, AppContext};
use super::input::LineInput;
use super::print::{print_error, print_stats};
use super::words::split_words;
use clap::Parser;
use clientbook::error::Result;
use std::io::Write;

const PROMPT: &str = "clientbook> ";

/// Read commands line by line until `quit` or end of input.
///
/// Errors from a single line are printed and the session goes on; only
/// failures to read input or write output end it.
pub fn run<L: LineInput, W: Write>(ctx: &mut AppContext, input: &mut L, out: &mut W) -> Result<()> {
    writeln!(out, "Clientbook session. Type \"help\" for commands, \"quit\" to leave.")?;
    if let Some(stats) = ctx.book.stats()?.stats {
        print_stats(out, &stats)?;
    }

    loop {
        let Some(line) = input.next_line(PROMPT, out)? else {
            break;
        };

        let words = match split_words(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => {
                input.remember(line.trim_end());
                words
            }
            Err(e) => {
                print_error(out, &e)?;
                continue;
            }
        };

        match SessionLine::try_parse_from(words) {
            Ok(SessionLine {
                command: SessionCommand::Quit,
            }) => break,
            Ok(SessionLine {
                command: SessionCommand::Client(command),
            }) => {
                if let Err(e) = execute(ctx, command, input, out) {
                    tracing::debug!(error = %e, "command failed");
                    print_error(out, &e)?;
                }
            }
            Err(e) => {
                // Help requests arrive here too; clap renders both the same way.
                tracing::trace!(kind = ?e.kind(), "session line not executed");
                write!(out, "{}", e.render())?;
            }
        }
    }

    tracing::debug!(clients = ctx.book.len(), "session ended");
    Ok(())
}
