//! Session reports and rendering strategies.
//!
//! At game end the engine assembles one [`SessionReport`] from its
//! structured turn records and hands it to each formatter. Formatters
//! render from the structured data; nothing re-parses display strings.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use lectern_core::{Error, Result};
use serde::Serialize;

// =============================================================================
// Turn Record
// =============================================================================

/// One resolved turn.
#[derive(Clone, Debug, Serialize)]
pub struct TurnRecord {
    /// Display name of the player who took the turn.
    pub player: String,
    /// Category of the selected question.
    pub category: String,
    /// Point value of the selected question.
    pub value: u32,
    /// The answer key as given, after normalization.
    pub answer: String,
    /// Whether the answer matched.
    pub correct: bool,
    /// Signed score change applied.
    pub delta: i64,
    /// The player's score after the turn.
    pub score_after: i64,
}

impl TurnRecord {
    /// Creates a turn record.
    #[must_use]
    pub fn new(
        player: impl Into<String>,
        category: impl Into<String>,
        value: u32,
        answer: impl Into<String>,
        correct: bool,
        delta: i64,
        score_after: i64,
    ) -> Self {
        Self {
            player: player.into(),
            category: category.into(),
            value,
            answer: answer.into(),
            correct,
            delta,
            score_after,
        }
    }
}

impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.correct { "CORRECT" } else { "WRONG" };
        write!(
            f,
            "{}: {} for {} points - {outcome} ({:+} points)",
            self.player, self.category, self.value, self.delta
        )
    }
}

// =============================================================================
// Session Report
// =============================================================================

/// Roster snapshot entry in a report.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerStanding {
    /// Stable player id, rendered as `P1`, `P2`, ...
    pub id: String,
    /// Display name.
    pub name: String,
    /// Score at report time.
    pub score: i64,
}

impl PlayerStanding {
    /// Creates a standing entry.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, score: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score,
        }
    }
}

/// The structured end-of-game summary.
#[derive(Clone, Debug, Serialize)]
pub struct SessionReport {
    /// Session id, e.g. `GAME-1700000000000`.
    pub session_id: String,
    /// Roster snapshot in join order.
    pub players: Vec<PlayerStanding>,
    /// Resolved turns in play order.
    pub turns: Vec<TurnRecord>,
    /// Winner name; `None` for a session with no players.
    pub winner: Option<String>,
}

impl SessionReport {
    /// Creates an empty report for the given session.
    #[must_use]
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            players: Vec::new(),
            turns: Vec::new(),
            winner: None,
        }
    }

    /// Builder method to append a player standing.
    #[must_use]
    pub fn with_standing(mut self, standing: PlayerStanding) -> Self {
        self.players.push(standing);
        self
    }

    /// Builder method to append a turn record.
    #[must_use]
    pub fn with_turn(mut self, turn: TurnRecord) -> Self {
        self.turns.push(turn);
        self
    }

    /// Builder method to set the winner name.
    #[must_use]
    pub fn with_winner(mut self, winner: impl Into<String>) -> Self {
        self.winner = Some(winner.into());
        self
    }
}

// =============================================================================
// Report Formatter Trait
// =============================================================================

/// Strategy for rendering a session report.
pub trait ReportFormatter {
    /// Renders the report to its output representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be rendered.
    fn format(&self, report: &SessionReport) -> Result<String>;

    /// File name the rendering is conventionally written to.
    fn file_name(&self) -> &'static str;
}

// =============================================================================
// Text Formatter
// =============================================================================

/// Renders a bordered plain-text report.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Creates a text formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &SessionReport) -> Result<String> {
        use std::fmt::Write;

        let mut out = String::new();
        let title = "LECTERN GAME REPORT";
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "{}", "=".repeat(title.len()));
        let _ = writeln!(out);
        let _ = writeln!(out, "Case ID: {}", report.session_id);
        let _ = writeln!(out);
        let names: Vec<&str> = report.players.iter().map(|p| p.name.as_str()).collect();
        let _ = writeln!(out, "Players: {}", names.join(", "));
        let _ = writeln!(out);
        let _ = writeln!(out, "Gameplay Summary:");
        let _ = writeln!(out, "-----------------");

        for (index, turn) in report.turns.iter().enumerate() {
            let outcome = if turn.correct { "Correct" } else { "Incorrect" };
            let _ = writeln!(
                out,
                "Turn {}: {} selected {} for {} pts",
                index + 1,
                turn.player,
                turn.category,
                turn.value
            );
            let _ = writeln!(
                out,
                "Answer: {} - {outcome} ({:+} pts)",
                turn.answer, turn.delta
            );
            let _ = writeln!(out, "Score after turn: {} = {}", turn.player, turn.score_after);
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Final Scores:");
        for standing in &report.players {
            let _ = writeln!(out, "{}: {}", standing.name, standing.score);
        }

        if let Some(winner) = &report.winner {
            let _ = writeln!(out);
            let _ = writeln!(out, "Winner: {winner}");
        }

        Ok(out)
    }

    fn file_name(&self) -> &'static str {
        "game_report.txt"
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Renders the report as pretty-printed JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &SessionReport) -> Result<String> {
        serde_json::to_string_pretty(report)
            .map_err(|e| Error::io(format!("failed to render json report: {e}")))
    }

    fn file_name(&self) -> &'static str {
        "game_report.json"
    }
}

// =============================================================================
// Report Writing
// =============================================================================

/// Writes all standard report renderings into `dir`.
///
/// Creates the directory when missing. Returns the written paths, text
/// report first.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created or a file
/// cannot be written.
pub fn write_reports<P: AsRef<Path>>(report: &SessionReport, dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| {
        Error::io(format!(
            "failed to create report directory '{}': {e}",
            dir.display()
        ))
    })?;

    let formatters: [&dyn ReportFormatter; 2] = [&TextFormatter, &JsonFormatter];
    let mut written = Vec::with_capacity(formatters.len());
    for formatter in formatters {
        let path = dir.join(formatter.file_name());
        let rendered = formatter.format(report)?;
        fs::write(&path, rendered)
            .map_err(|e| Error::io(format!("failed to write report '{}': {e}", path.display())))?;
        written.push(path);
    }
    Ok(written)
}
