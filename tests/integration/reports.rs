//! Report rendering: written files agree with the returned report.

use lectern_audit::{MemoryAuditSink, ReportFormatter, SessionReport, TextFormatter};
use lectern_engine::{ScriptedConsole, TurnSession};
use lectern_parser::{SourceFormat, parser_for};
use std::fs;
use std::path::{Path, PathBuf};

const FIXTURE_CSV: &str = "Category,Value,QuestionText,A,B,CorrectAnswer\n\
                           Rust,100,Which keyword declares an immutable binding?,let,mut,A\n\
                           Rust,200,Which keyword makes a binding mutable?,let,mut,B\n";

/// Creates an empty scratch directory for report output.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Plays both fixture questions with two players, reporting into `dir`.
fn play_reporting(dir: &Path, session_id: &str) -> SessionReport {
    let questions = parser_for(SourceFormat::Csv).parse(FIXTURE_CSV).unwrap();
    let console = ScriptedConsole::new([
        "2", "Ada", "Grace",
        "Rust", "100", "A", // Ada: correct, +100
        "Rust", "200", "A", // Grace: wrong, -200
    ]);
    let mut sink = MemoryAuditSink::new();

    let mut session = TurnSession::new(session_id, console, questions).with_report_dir(dir);
    session.run(&mut sink).unwrap()
}

#[test]
fn written_text_report_matches_the_formatter_output() {
    let dir = scratch_dir("lectern_it_report_text");
    let report = play_reporting(&dir, "GAME-IT-TEXT");

    let written = fs::read_to_string(dir.join("game_report.txt")).unwrap();
    let rendered = TextFormatter.format(&report).unwrap();
    let _ = fs::remove_dir_all(&dir);

    assert_eq!(written, rendered);
}

#[test]
fn text_report_sections_appear_in_order() {
    let dir = scratch_dir("lectern_it_report_order");
    let report = play_reporting(&dir, "GAME-IT-ORDER");
    let _ = fs::remove_dir_all(&dir);

    let text = TextFormatter.format(&report).unwrap();
    let sections = [
        "LECTERN GAME REPORT",
        "Case ID: GAME-IT-ORDER",
        "Players: Ada, Grace",
        "Gameplay Summary:",
        "Turn 1: Ada selected Rust for 100 pts",
        "Final Scores:",
        "Winner: Ada",
    ];

    let mut last = 0;
    for section in sections {
        let at = text[last..].find(section).unwrap_or_else(|| {
            panic!("section '{section}' missing or out of order:\n{text}")
        });
        last += at + section.len();
    }
}

#[test]
fn json_report_round_trips_through_serde() {
    let dir = scratch_dir("lectern_it_report_json");
    let report = play_reporting(&dir, "GAME-IT-JSON");

    let raw = fs::read_to_string(dir.join("game_report.json")).unwrap();
    let _ = fs::remove_dir_all(&dir);
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["session_id"], "GAME-IT-JSON");
    assert_eq!(value["winner"], "Ada");
    assert_eq!(value["players"][0]["name"], "Ada");
    assert_eq!(value["players"][0]["score"], 100);
    assert_eq!(value["players"][1]["score"], -200);
    assert_eq!(value["turns"][0]["correct"], true);
    assert_eq!(value["turns"][1]["delta"], -200);
    assert_eq!(report.turns.len(), 2);
}
