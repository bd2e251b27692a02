//! Interactive console backed by rustyline.
//!
//! Implements the engine's [`Console`] trait over a real terminal, with
//! line editing and input history for category and answer prompts.

use lectern_core::{Error, ErrorKind, Result};
use lectern_engine::{Console, ReadLine};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Console implementation using rustyline for the interactive binary.
pub struct RustylineConsole {
    editor: DefaultEditor,
}

impl RustylineConsole {
    /// Creates a new rustyline-backed console.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let editor =
            DefaultEditor::new().map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        Ok(Self { editor })
    }
}

impl Console for RustylineConsole {
    fn read_line(&mut self, prompt: &str) -> Result<ReadLine> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(&line);
                Ok(ReadLine::Line(line))
            }
            // Ctrl+C and Ctrl+D both read as a quit request.
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(ReadLine::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn print(&mut self, text: &str) {
        println!("{text}");
    }
}
