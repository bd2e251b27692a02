//! Error types for the Lectern system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Convenience alias for operations that can fail with a Lectern [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Lectern operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a missing-resource error.
    #[must_use]
    pub fn resource_missing(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceMissing { path: path.into() })
    }

    /// Creates an unreadable-resource error.
    #[must_use]
    pub fn resource_unreadable(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceUnreadable {
            path: path.into(),
            detail: detail.into(),
        })
    }

    /// Creates an empty-resource error.
    #[must_use]
    pub fn resource_empty(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceEmpty { path: path.into() })
    }

    /// Creates an unsupported-format error.
    #[must_use]
    pub fn unsupported_format(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedFormat { path: path.into() })
    }

    /// Creates a malformed-structure error for the named input format.
    #[must_use]
    pub fn format(format: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format {
            format: format.into(),
            detail: detail.into(),
        })
    }

    /// Creates a selection-miss error for a category/value pair.
    #[must_use]
    pub fn selection_miss(category: impl Into<String>, value: u32) -> Self {
        Self::new(ErrorKind::SelectionMiss {
            category: category.into(),
            value,
        })
    }

    /// Creates an input-format error for unusable textual input.
    #[must_use]
    pub fn input_format(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(ErrorKind::InputFormat {
            input: input.into(),
            expected: expected.into(),
        })
    }

    /// Creates a player-count error for an out-of-bounds count.
    #[must_use]
    pub fn player_count(given: u32) -> Self {
        Self::new(ErrorKind::PlayerCount { given })
    }

    /// Creates a command-replay error for an execute from the named state.
    #[must_use]
    pub fn command_replay(state: impl Into<String>) -> Self {
        Self::new(ErrorKind::CommandReplay {
            state: state.into(),
        })
    }

    /// Creates an I/O error with a formatted detail message.
    #[must_use]
    pub fn io(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io {
            detail: detail.into(),
        })
    }

    /// Creates a closed-console error.
    #[must_use]
    pub fn console_closed() -> Self {
        Self::new(ErrorKind::ConsoleClosed)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Question resource does not exist.
    #[error("question file not found: {path}")]
    ResourceMissing {
        /// The path that was requested.
        path: String,
    },

    /// Question resource exists but could not be read.
    #[error("question file unreadable: {path}: {detail}")]
    ResourceUnreadable {
        /// The path that was requested.
        path: String,
        /// The underlying read failure.
        detail: String,
    },

    /// Question resource contains no data.
    #[error("question file is empty: {path}")]
    ResourceEmpty {
        /// The path that was requested.
        path: String,
    },

    /// Resource suffix maps to no known parser.
    #[error("unsupported question file format: {path} (expected .csv, .json, or .xml)")]
    UnsupportedFormat {
        /// The path that was requested.
        path: String,
    },

    /// Input structure is malformed for its format.
    #[error("malformed {format} input: {detail}")]
    Format {
        /// The input format being parsed.
        format: String,
        /// Description of the structural problem.
        detail: String,
    },

    /// Requested category/value pair matched no remaining question.
    #[error("no question found for category '{category}' at value {value}")]
    SelectionMiss {
        /// The category as entered by the player.
        category: String,
        /// The value as entered by the player.
        value: u32,
    },

    /// Textual input could not be interpreted as the expected token.
    #[error("unusable input '{input}': expected {expected}")]
    InputFormat {
        /// The raw input line.
        input: String,
        /// What the input was expected to be.
        expected: String,
    },

    /// Player count outside the supported bounds.
    #[error("player count {given} outside supported range 1-4")]
    PlayerCount {
        /// The count that was requested.
        given: u32,
    },

    /// Command executed from a state other than unexecuted.
    #[error("command already {state}: execute is only valid once")]
    CommandReplay {
        /// The state the command was in.
        state: String,
    },

    /// Underlying I/O failure on a sink or resource.
    #[error("io error: {detail}")]
    Io {
        /// The underlying failure.
        detail: String,
    },

    /// Console reported end of input where a line was required.
    #[error("console closed before required input")]
    ConsoleClosed,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Source file or component name.
    pub source: Option<String>,
    /// Line number in source, where meaningful.
    pub line: Option<usize>,
    /// Trail of operations leading to the failure.
    pub trail: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            trail: Vec::new(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds an operation to the trail.
    #[must_use]
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.trail.push(step.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if !self.trail.is_empty() {
            writeln!(f)?;
            for step in &self.trail {
                writeln!(f, "  in {step}")?;
            }
        }
        Ok(())
    }
}
