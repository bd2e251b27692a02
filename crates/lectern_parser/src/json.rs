//! Object-notation question parsing.
//!
//! Accepts either a bare array of question objects or an object wrapping
//! that array under `JeopardyQuestions` or `questions`. Absent optional
//! fields default to an empty string or zero; present fields of the wrong
//! type are format errors. `serde_json` is built with `preserve_order`, so
//! option objects keep their source ordering.

use serde_json::{Map, Value as Json};

use lectern_core::{Error, Question, Result};

use crate::format::QuestionParser;

/// Parser for the object-notation format.
pub struct JsonQuestionParser;

impl QuestionParser for JsonQuestionParser {
    fn parse(&self, source: &str) -> Result<Vec<Question>> {
        let root: Json = serde_json::from_str(source.trim())
            .map_err(|e| Error::format("json", e.to_string()))?;

        let items = match &root {
            Json::Array(items) => items.as_slice(),
            Json::Object(map) => wrapped_array(map)?,
            _ => {
                return Err(Error::format(
                    "json",
                    "expected an array of questions or a wrapping object",
                ));
            }
        };

        items.iter().map(question_from_object).collect()
    }
}

/// Finds the question array inside a wrapping object.
fn wrapped_array(map: &Map<String, Json>) -> Result<&[Json]> {
    let found = map
        .get("JeopardyQuestions")
        .or_else(|| map.get("questions"));
    match found {
        Some(Json::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(Error::format(
            "json",
            "question container is not an array",
        )),
        None => Err(Error::format(
            "json",
            "no 'JeopardyQuestions' or 'questions' array",
        )),
    }
}

/// Builds a question from one object entry.
fn question_from_object(item: &Json) -> Result<Question> {
    let Some(obj) = item.as_object() else {
        return Err(Error::format("json", "question entry is not an object"));
    };

    let category = safe_string(obj, "Category")?;
    let value = safe_value(obj)?;
    let prompt = prompt_of(obj)?;
    let correct = safe_string(obj, "CorrectAnswer")?;

    let mut question = Question::new(category, value, prompt, correct);

    if let Some(options) = obj.get("Options") {
        let Some(map) = options.as_object() else {
            return Err(Error::format("json", "'Options' is not an object"));
        };
        for (key, text) in map {
            let Some(text) = text.as_str() else {
                return Err(Error::format(
                    "json",
                    format!("option '{key}' is not a string"),
                ));
            };
            question = question.with_option(key.clone(), text);
        }
    }
    Ok(question)
}

/// Prompt text: `QuestionText` with `Question` as the accepted alias.
fn prompt_of(obj: &Map<String, Json>) -> Result<String> {
    let found = obj.get("QuestionText").or_else(|| obj.get("Question"));
    match found {
        Some(Json::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::format("json", "question text is not a string")),
        None => Ok(String::new()),
    }
}

/// String field: empty when absent, error when present but not a string.
fn safe_string(obj: &Map<String, Json>, key: &str) -> Result<String> {
    match obj.get(key) {
        Some(Json::String(s)) => Ok(s.clone()),
        Some(_) => Err(Error::format(
            "json",
            format!("'{key}' is not a string"),
        )),
        None => Ok(String::new()),
    }
}

/// Value field: zero when absent; a non-negative integer or a numeric
/// string when present.
fn safe_value(obj: &Map<String, Json>) -> Result<u32> {
    match obj.get("Value") {
        None => Ok(0),
        Some(Json::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                Error::format("json", format!("'Value' {n} is not a non-negative integer"))
            }),
        Some(Json::String(s)) => s.trim().parse::<u32>().map_err(|_| {
            Error::format("json", format!("'Value' '{s}' is not a non-negative integer"))
        }),
        Some(_) => Err(Error::format("json", "'Value' is not a number")),
    }
}
