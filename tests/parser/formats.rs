//! Cross-format tests over the shipped sample resources.
//!
//! The same eight-category quiz ships as CSV, JSON, and XML; every parser
//! must produce the identical question set from its own rendition.

use lectern_core::Question;
use lectern_parser::{SourceFormat, load_questions, parser_for};
use std::path::PathBuf;

/// Returns the path of a shipped sample resource.
fn shipped(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

// =============================================================================
// Shipped Resource Agreement
// =============================================================================

#[test]
fn shipped_resources_agree_across_formats() {
    let csv = load_questions(shipped("questions.csv")).unwrap();
    let json = load_questions(shipped("questions.json")).unwrap();
    let xml = load_questions(shipped("questions.xml")).unwrap();

    assert_eq!(csv, json);
    assert_eq!(json, xml);
}

#[test]
fn shipped_quiz_covers_eight_categories_at_two_values() {
    let questions = load_questions(shipped("questions.xml")).unwrap();

    assert_eq!(questions.len(), 16);

    let mut categories: Vec<&str> = questions.iter().map(Question::category).collect();
    categories.sort_unstable();
    categories.dedup();
    assert_eq!(categories.len(), 8);

    for category in categories {
        let mut values: Vec<u32> = questions
            .iter()
            .filter(|q| q.category() == category)
            .map(Question::value)
            .collect();
        values.sort_unstable();
        assert_eq!(values, [100, 200], "category {category}");
    }
}

#[test]
fn every_shipped_question_keys_a_real_option() {
    let questions = load_questions(shipped("questions.json")).unwrap();

    for question in &questions {
        assert!(
            question.options().get(question.correct_answer()).is_some(),
            "correct key {} missing from options of '{}'",
            question.correct_answer(),
            question.prompt()
        );
        assert_eq!(question.options().len(), 4);
        assert!(!question.prompt().is_empty());
    }
}

#[test]
fn shipped_quiz_preserves_entity_and_quoted_fields() {
    let xml = load_questions(shipped("questions.xml")).unwrap();
    let csv = load_questions(shipped("questions.csv")).unwrap();

    // The XML escapes the ampersand; the CSV quotes the comma-bearing prompt.
    assert!(xml.iter().any(|q| q.category() == "Variables & Data Types"));
    assert!(
        csv.iter()
            .any(|q| q.prompt() == "Which structure is last-in, first-out?")
    );
}

// =============================================================================
// Inline Agreement Through the Factory
// =============================================================================

#[test]
fn parsers_agree_on_equivalent_inline_sources() {
    let csv_src = "Category,Value,QuestionText,A,B,CorrectAnswer\n\
                   Logic,300,Which gate inverts?,AND,NOT,B\n";
    let json_src = r#"{
        "JeopardyQuestions": [{
            "Category": "Logic",
            "Value": 300,
            "QuestionText": "Which gate inverts?",
            "Options": { "A": "AND", "B": "NOT" },
            "CorrectAnswer": "B"
        }]
    }"#;
    let xml_src = "<JeopardyQuestions><QuestionItem>\
                   <Category>Logic</Category><Value>300</Value>\
                   <QuestionText>Which gate inverts?</QuestionText>\
                   <Options><A>AND</A><B>NOT</B></Options>\
                   <CorrectAnswer>B</CorrectAnswer>\
                   </QuestionItem></JeopardyQuestions>";

    let csv = parser_for(SourceFormat::Csv).parse(csv_src).unwrap();
    let json = parser_for(SourceFormat::Json).parse(json_src).unwrap();
    let xml = parser_for(SourceFormat::Xml).parse(xml_src).unwrap();

    assert_eq!(csv, json);
    assert_eq!(json, xml);
    assert!(csv[0].accepts_answer("b"));
}
