//! Input format detection and parser selection.
//!
//! Formats are recognized by filename suffix alone; content sniffing is
//! deliberately absent so a mislabeled file fails loudly in its parser.

use std::fmt;
use std::path::Path;

use lectern_core::{Question, Result};

use crate::csv::CsvQuestionParser;
use crate::json::JsonQuestionParser;
use crate::xml::XmlQuestionParser;

/// The three recognized question-resource formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Tabular, comma-separated, header row first.
    Csv,
    /// Object-notation: a bare array or a wrapping object.
    Json,
    /// Markup: repeating `QuestionItem` elements.
    Xml,
}

impl SourceFormat {
    /// Detects a format from a path's suffix, case-insensitively.
    ///
    /// Returns `None` for any suffix outside the recognized three; the
    /// caller turns that into an unsupported-format error.
    #[must_use]
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".csv") {
            Some(Self::Csv)
        } else if name.ends_with(".json") {
            Some(Self::Json)
        } else if name.ends_with(".xml") {
            Some(Self::Xml)
        } else {
            None
        }
    }

    /// Returns the lowercase format name used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parser for one question-resource format.
///
/// Implementations take the full resource text and produce questions in
/// input order, preserving option insertion order within each question.
pub trait QuestionParser {
    /// Parses the resource text into a question sequence.
    ///
    /// # Errors
    ///
    /// Returns a format error when the content is structurally malformed
    /// for this format. Per-row degradation rules (tabular) are not
    /// errors.
    fn parse(&self, source: &str) -> Result<Vec<Question>>;
}

/// Returns the parser for a detected format.
#[must_use]
pub fn parser_for(format: SourceFormat) -> Box<dyn QuestionParser> {
    match format {
        SourceFormat::Csv => Box::new(CsvQuestionParser),
        SourceFormat::Json => Box::new(JsonQuestionParser),
        SourceFormat::Xml => Box::new(XmlQuestionParser),
    }
}
