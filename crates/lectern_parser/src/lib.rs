//! Question ingestion for Lectern.
//!
//! This crate provides:
//! - [`SourceFormat`] - Suffix-based format detection
//! - [`QuestionParser`] - The per-format parsing capability
//! - [`load_questions`] - The resource loading entry point
//!
//! Three formats are supported: tabular (`.csv`), object-notation
//! (`.json`), and markup (`.xml`). All three normalize into the same
//! [`Question`](lectern_core::Question) entity model, preserving input
//! order and per-question option order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod csv;
pub mod format;
pub mod json;
pub mod xml;

use std::path::Path;

use lectern_core::{Error, ErrorContext, Question, Result};

pub use csv::CsvQuestionParser;
pub use format::{QuestionParser, SourceFormat, parser_for};
pub use json::JsonQuestionParser;
pub use xml::XmlQuestionParser;

/// Loads a question set from a file, dispatching on the path suffix.
///
/// The suffix is checked before the filesystem is touched, so an
/// unsupported format reports as such even for a nonexistent path.
/// Content that is empty after trimming is rejected before parsing.
///
/// # Errors
///
/// Returns `UnsupportedFormat` for an unrecognized suffix,
/// `ResourceMissing` / `ResourceUnreadable` / `ResourceEmpty` for file
/// problems, and a format error if the content is structurally malformed.
/// Format errors carry the source path as context.
pub fn load_questions<P: AsRef<Path>>(path: P) -> Result<Vec<Question>> {
    let path = path.as_ref();
    let Some(format) = SourceFormat::detect(path) else {
        return Err(Error::unsupported_format(path.display().to_string()));
    };

    if !path.exists() {
        return Err(Error::resource_missing(path.display().to_string()));
    }

    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::resource_unreadable(path.display().to_string(), e.to_string()))?;

    if text.trim().is_empty() {
        return Err(Error::resource_empty(path.display().to_string()));
    }

    parser_for(format)
        .parse(&text)
        .map_err(|e| e.with_context(ErrorContext::new().with_source(path.display().to_string())))
}
