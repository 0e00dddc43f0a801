use clientbook::error::{ClientError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, Write};

/// Where session lines and confirmation answers come from.
pub trait LineInput {
    /// Show `prompt` and read one line. `None` means input has ended.
    fn next_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<Option<String>>;

    /// Record a session line for later recall. Readers without history ignore it.
    fn remember(&mut self, _line: &str) {}
}

/// Plain buffered reader: piped stdin and tests.
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineInput for ReaderInput<R> {
    fn next_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<Option<String>> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Line editor with history, used when stdin is a terminal.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self { editor })
    }
}

impl LineInput for EditorInput {
    fn next_line<W: Write>(&mut self, prompt: &str, out: &mut W) -> Result<Option<String>> {
        // The editor draws its own prompt; earlier output must land first.
        out.flush()?;

        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C drops the current line, like a shell.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => {
                writeln!(out)?;
                Ok(None)
            }
            Err(e) => Err(readline_error(e)),
        }
    }

    fn remember(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::debug!(error = %e, "history entry not added");
        }
    }
}

fn readline_error(e: ReadlineError) -> ClientError {
    match e {
        ReadlineError::Io(e) => ClientError::Io(e),
        other => ClientError::Io(io::Error::other(other.to_string())),
    }
}
