//! Console boundary.
//!
//! The engine talks to players through this trait only, so the same turn
//! machine drives an interactive terminal and a scripted test run.

use lectern_core::Result;

/// Result of reading a line from the console.
#[derive(Debug)]
pub enum ReadLine {
    /// A line was read.
    Line(String),
    /// Input is finished; the engine treats this as a quit request.
    Eof,
}

/// Line-oriented text boundary between the engine and a player.
pub trait Console {
    /// Reads one line, showing `prompt` without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input source fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadLine>;

    /// Writes one line of display output.
    fn print(&mut self, text: &str);
}

/// Console fed from a fixed input script.
///
/// Every prompt and printed line is captured in a transcript, and the
/// script's exhaustion reads as [`ReadLine::Eof`]. Used by tests and
/// headless demos.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    script: std::collections::VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will replay the given lines in order.
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: script.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Returns the captured prompts and output lines in order.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Returns the transcript joined into one newline-separated string.
    #[must_use]
    pub fn transcript_text(&self) -> String {
        self.transcript.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<ReadLine> {
        self.transcript.push(prompt.to_string());
        Ok(match self.script.pop_front() {
            Some(line) => ReadLine::Line(line),
            None => ReadLine::Eof,
        })
    }

    fn print(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}
