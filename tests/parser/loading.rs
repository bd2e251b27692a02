//! Loader tests: suffix dispatch and resource-level failures.

use lectern_core::ErrorKind;
use lectern_parser::load_questions;
use std::fs;
use std::path::PathBuf;

/// Returns a unique path in the system temp directory.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

// =============================================================================
// Suffix Dispatch
// =============================================================================

#[test]
fn load_dispatches_on_csv_suffix() {
    let path = temp_path("lectern_loading_dispatch.csv");
    fs::write(
        &path,
        "Category,Value,QuestionText,A,B,CorrectAnswer\nMath,100,What is 1+1?,2,3,A\n",
    )
    .unwrap();

    let questions = load_questions(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].category(), "Math");
    assert_eq!(questions[0].value(), 100);
    assert_eq!(questions[0].options().get("B"), Some("3"));
}

#[test]
fn load_accepts_uppercase_suffix() {
    let path = temp_path("LECTERN_LOADING_UPPER.XML");
    fs::write(
        &path,
        "<JeopardyQuestions><QuestionItem>\
         <Category>Math</Category><Value>100</Value>\
         <QuestionText>What is 1+1?</QuestionText>\
         <Options><A>2</A></Options>\
         <CorrectAnswer>A</CorrectAnswer>\
         </QuestionItem></JeopardyQuestions>",
    )
    .unwrap();

    let questions = load_questions(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].correct_answer(), "A");
}

// =============================================================================
// Resource Failures
// =============================================================================

#[test]
fn unsupported_suffix_is_rejected_before_reading() {
    // The file does not exist; the suffix check must come first.
    let err = load_questions(temp_path("lectern_loading_unknown.yaml")).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_reports_resource_missing() {
    let err = load_questions(temp_path("lectern_loading_absent.csv")).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::ResourceMissing { .. }));
}

#[test]
fn blank_file_reports_resource_empty() {
    let path = temp_path("lectern_loading_blank.json");
    fs::write(&path, "  \n\n\t\n").unwrap();

    let err = load_questions(&path).unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(err.kind, ErrorKind::ResourceEmpty { .. }));
}

#[test]
fn malformed_content_reports_format_error() {
    let path = temp_path("lectern_loading_malformed.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_questions(&path).unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(err.kind, ErrorKind::Format { .. }));
}
