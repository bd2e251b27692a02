//! Audit log shape: the on-disk CSV stays machine-readable.

use lectern_audit::CsvAuditSink;
use lectern_engine::{ScriptedConsole, TurnSession};
use lectern_parser::{SourceFormat, parser_for};
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: &str =
    "Case_ID,Player_ID,Activity,Timestamp,Category,Question_Value,Answer_Given,Result,Score_After_Play";

const FIXTURE_CSV: &str = "Category,Value,QuestionText,A,B,CorrectAnswer\n\
                           Rust,100,Which keyword declares an immutable binding?,let,mut,A\n\
                           Rust,200,Which keyword makes a binding mutable?,let,mut,B\n";

/// Returns a unique log path in the system temp directory.
fn temp_log(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

/// Runs one scripted session against the fixture quiz, logging to `path`.
fn run_logged<const N: usize>(path: &Path, session_id: &str, script: [&str; N]) {
    let questions = parser_for(SourceFormat::Csv).parse(FIXTURE_CSV).unwrap();
    let mut sink = CsvAuditSink::open(path).unwrap();
    let console = ScriptedConsole::new(script);

    let mut session = TurnSession::new(session_id, console, questions);
    session.run(&mut sink).unwrap();
}

#[test]
fn every_row_keeps_nine_columns_even_with_commas_in_names() {
    let path = temp_log("lectern_it_log_shape.csv");
    let _ = fs::remove_file(&path);

    run_logged(&path, "GAME-LOG-SHAPE", [
        "1", "Smith, Ada", "Rust", "100", "A", "quit",
    ]);

    let log = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);
    let rows: Vec<&str> = log.lines().collect();

    assert_eq!(rows[0], HEADER);
    assert_eq!(rows.len(), 5, "header, start, join, answer, exit");
    for row in &rows {
        assert_eq!(row.split(',').count(), 9, "row: {row}");
    }

    // The comma in the entered name was replaced, not quoted.
    let join_row: Vec<&str> = rows[2].split(',').collect();
    assert_eq!(join_row[2], "Player Joined");
    assert_eq!(join_row[6], "Smith; Ada");
}

#[test]
fn answer_rows_carry_question_and_outcome_fields() {
    let path = temp_log("lectern_it_log_answer.csv");
    let _ = fs::remove_file(&path);

    run_logged(&path, "GAME-LOG-ANSWER", [
        "1", "Ada", "Rust", "200", "a", "quit",
    ]);

    let log = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);
    let answer_row: Vec<&str> = log
        .lines()
        .find(|l| l.contains(",Answer Question,"))
        .unwrap()
        .split(',')
        .collect();

    assert_eq!(answer_row[0], "GAME-LOG-ANSWER");
    assert_eq!(answer_row[1], "P1");
    assert_eq!(answer_row[4], "Rust");
    assert_eq!(answer_row[5], "200");
    // Lowercase input was normalized before recording.
    assert_eq!(answer_row[6], "A");
    assert_eq!(answer_row[7], "Incorrect");
    assert_eq!(answer_row[8], "-200");
}

#[test]
fn sessions_share_a_log_without_duplicate_headers() {
    let path = temp_log("lectern_it_log_shared.csv");
    let _ = fs::remove_file(&path);

    run_logged(&path, "GAME-LOG-A", ["1", "Ada", "quit"]);
    run_logged(&path, "GAME-LOG-B", ["1", "Bea", "quit"]);

    let log = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(log.matches("Case_ID").count(), 1);
    assert!(log.contains("GAME-LOG-A"));
    assert!(log.contains("GAME-LOG-B"));
}

#[test]
fn timestamps_render_utc_with_millisecond_precision() {
    let path = temp_log("lectern_it_log_time.csv");
    let _ = fs::remove_file(&path);

    run_logged(&path, "GAME-LOG-TIME", ["1", "Ada", "quit"]);

    let log = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);
    let start_row: Vec<&str> = log.lines().nth(1).unwrap().split(',').collect();
    let timestamp = start_row[3];

    assert!(timestamp.contains('T'), "timestamp: {timestamp}");
    assert!(timestamp.contains('.'), "timestamp: {timestamp}");
    assert!(timestamp.ends_with('Z'), "timestamp: {timestamp}");
}
