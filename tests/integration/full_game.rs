//! End-to-end sessions: question file in, audit log and reports out.

use lectern_audit::{CsvAuditSink, SessionReport};
use lectern_engine::{ScriptedConsole, TurnSession};
use lectern_parser::load_questions;
use std::fs;
use std::path::{Path, PathBuf};

const FIXTURE_CSV: &str = "Category,Value,QuestionText,A,B,CorrectAnswer\n\
                           Rust,100,Which keyword declares an immutable binding?,let,mut,A\n\
                           Rust,200,Which keyword makes a binding mutable?,let,mut,B\n";

/// Creates a scratch directory seeded with the fixture question file.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("questions.csv"), FIXTURE_CSV).unwrap();
    dir
}

/// Runs one scripted session in `dir`, writing its log and reports there.
fn run_in<const N: usize>(dir: &Path, session_id: &str, script: [&str; N]) -> SessionReport {
    let questions = load_questions(dir.join("questions.csv")).unwrap();
    let mut sink = CsvAuditSink::open(dir.join("game_log.csv")).unwrap();
    let console = ScriptedConsole::new(script);

    let mut session = TurnSession::new(session_id, console, questions).with_report_dir(dir);
    session.run(&mut sink).unwrap()
}

#[test]
fn exhausting_the_pool_finishes_the_game_and_writes_everything() {
    let dir = scratch_dir("lectern_it_full");

    let report = run_in(&dir, "GAME-IT-FULL", [
        "2", "Ada", "Grace",
        "Rust", "100", "A", // Ada: correct, +100
        "Rust", "200", "A", // Grace: wrong, -200
    ]);

    assert_eq!(report.winner.as_deref(), Some("Ada"));
    assert_eq!(report.turns.len(), 2);
    assert_eq!(report.players.len(), 2);
    assert_eq!(report.players[0].name, "Ada");
    assert_eq!(report.players[0].score, 100);
    assert_eq!(report.players[1].score, -200);

    let text = fs::read_to_string(dir.join("game_report.txt")).unwrap();
    assert!(text.contains("LECTERN GAME REPORT"));
    assert!(text.contains("Winner: Ada"));

    let json = fs::read_to_string(dir.join("game_report.json")).unwrap();
    assert!(json.contains("\"GAME-IT-FULL\""));

    // Header, session start, two joins, two answers, report generation.
    let log = fs::read_to_string(dir.join("game_log.csv")).unwrap();
    assert_eq!(log.lines().count(), 7);
    assert!(!log.contains(",Exit Game,"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn quitting_before_any_answer_still_writes_reports() {
    let dir = scratch_dir("lectern_it_quit");

    let report = run_in(&dir, "GAME-IT-QUIT", ["1", "Solo", "quit"]);

    assert!(report.turns.is_empty());
    assert_eq!(report.winner.as_deref(), Some("Solo"));

    let text = fs::read_to_string(dir.join("game_report.txt")).unwrap();
    assert!(text.contains("Solo: 0"));

    let log = fs::read_to_string(dir.join("game_log.csv")).unwrap();
    assert!(log.contains(",Exit Game,"));
    assert!(!log.contains(",Answer Question,"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn input_ending_mid_selection_quits_cleanly() {
    let dir = scratch_dir("lectern_it_eof");

    // The script dries up at the category prompt; the session must end
    // like a quit, not an error.
    let report = run_in(&dir, "GAME-IT-EOF", ["1", "Solo"]);

    assert!(report.turns.is_empty());

    let log = fs::read_to_string(dir.join("game_log.csv")).unwrap();
    assert!(log.contains(",Exit Game,"));

    let _ = fs::remove_dir_all(&dir);
}
