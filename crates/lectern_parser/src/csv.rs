//! Tabular question parsing.
//!
//! Hand-rolled record scanner; no external CSV dependency. A quote
//! character toggles an in-quotes mode and is stripped from the output, so
//! quoted fields may contain the comma delimiter. The first record is a
//! header row mapping column names to fields positionally.

use lectern_core::{Options, Question, Result};

use crate::format::QuestionParser;

/// Parser for the tabular format.
///
/// Degradation rules: a malformed numeric value field becomes zero, and
/// rows that are blank or shorter than the header are skipped silently.
/// Nothing in this format aborts the parse.
pub struct CsvQuestionParser;

impl QuestionParser for CsvQuestionParser {
    fn parse(&self, source: &str) -> Result<Vec<Question>> {
        let mut lines = source.lines();
        let Some(header_line) = lines.next() else {
            return Ok(Vec::new());
        };
        let headers = split_record(header_line);

        let mut questions = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_record(line);
            if fields.len() < headers.len() {
                continue;
            }
            questions.push(question_from_row(&headers, &fields));
        }
        Ok(questions)
    }
}

/// Splits one record on commas, honoring the quote toggle.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Builds a question from one header-mapped row.
fn question_from_row(headers: &[String], fields: &[String]) -> Question {
    let mut category = String::new();
    let mut value = 0u32;
    let mut prompt = String::new();
    let mut correct = String::new();
    let mut options = Options::new();

    for (header, field) in headers.iter().zip(fields) {
        let name = header.trim();
        if name.eq_ignore_ascii_case("Category") {
            category = field.clone();
        } else if name.eq_ignore_ascii_case("Value") {
            value = field.trim().parse().unwrap_or(0);
        } else if name.eq_ignore_ascii_case("QuestionText") || name.eq_ignore_ascii_case("Question")
        {
            prompt = field.clone();
        } else if name.eq_ignore_ascii_case("CorrectAnswer") {
            correct = field.clone();
        } else if is_option_column(name) {
            // The column name as written becomes the option key.
            options.insert(name, field.clone());
        }
    }

    Question::new(category, value, prompt, correct).with_options(options)
}

/// Recognizes option columns: an `option` prefix or a bare letter A-D.
fn is_option_column(name: &str) -> bool {
    if name.len() == 1 {
        return name
            .chars()
            .next()
            .is_some_and(|c| matches!(c.to_ascii_uppercase(), 'A'..='D'));
    }
    name.to_ascii_lowercase().starts_with("option")
}
