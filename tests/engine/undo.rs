//! Undo across the command history, with a real on-disk audit log.

use lectern_audit::{CsvAuditSink, MemoryAuditSink};
use lectern_core::{PlayerId, Question, Roster};
use lectern_engine::{AnswerCommand, Command, CommandHistory, ScoreBoard, TurnContext};
use std::fs;
use std::path::PathBuf;

/// Returns a unique path in the system temp directory.
fn temp_log(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

fn wrong_answer() -> Box<dyn Command> {
    let question = Question::new("Databases", 300, "What does SQL stand for?", "A")
        .with_option("A", "Structured Query Language")
        .with_option("B", "Simple Query Language");
    Box::new(AnswerCommand::new(PlayerId::new(1), "Ada", question, "B"))
}

#[test]
fn undo_restores_score_but_keeps_the_log() {
    let path = temp_log("lectern_undo_keeps_log.csv");
    let _ = fs::remove_file(&path);

    let mut roster = Roster::new();
    let id = roster.join("Ada");
    let mut board = ScoreBoard::new();
    board.init_players(&roster);
    let mut sink = CsvAuditSink::open(&path).unwrap();
    let mut history = CommandHistory::new();

    let mut ctx = TurnContext {
        roster: &mut roster,
        observer: &mut board,
        sink: &mut sink,
        session_id: "GAME-UNDO",
    };
    history.execute_command(wrong_answer(), &mut ctx).unwrap();
    assert_eq!(ctx.roster.get(id).unwrap().score(), -300);

    assert!(history.undo_last(&mut ctx).unwrap());
    assert_eq!(ctx.roster.get(id).unwrap().score(), 0);

    // The log is append-only: the undone answer stays recorded.
    let log = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);
    let rows: Vec<&str> = log.lines().collect();
    assert_eq!(rows.len(), 2, "header plus the one recorded event");
    assert!(rows[1].contains(",Answer Question,"));
    assert!(rows[1].contains(",Incorrect,"));
    assert!(rows[1].ends_with(",-300"));
}

#[test]
fn scoreboard_tracks_execute_and_undo() {
    let mut roster = Roster::new();
    let id = roster.join("Ada");
    let mut board = ScoreBoard::new();
    board.init_players(&roster);
    let mut sink = MemoryAuditSink::new();
    let mut history = CommandHistory::new();

    let mut ctx = TurnContext {
        roster: &mut roster,
        observer: &mut board,
        sink: &mut sink,
        session_id: "GAME-UNDO",
    };
    history.execute_command(wrong_answer(), &mut ctx).unwrap();

    assert_eq!(board.score_of(id), Some(-300));

    let mut ctx = TurnContext {
        roster: &mut roster,
        observer: &mut board,
        sink: &mut sink,
        session_id: "GAME-UNDO",
    };
    assert!(history.undo_last(&mut ctx).unwrap());
    assert_eq!(board.score_of(id), Some(0));
}
