//! The turn state machine.
//!
//! Drives one full game session: setup, the round-robin turn loop, and
//! the game-over sequence. The engine owns the roster, the question
//! pool, and the score board; commands borrow them through a
//! [`TurnContext`] one call at a time.

use std::path::PathBuf;

use lectern_audit::{
    Activity, AuditEvent, AuditSink, PlayerStanding, SessionReport, TurnRecord, write_reports,
};
use lectern_core::{Error, ErrorKind, Player, Question, Result, Roster};

use crate::command::{AnswerCommand, TurnContext};
use crate::console::{Console, ReadLine};
use crate::history::CommandHistory;
use crate::pool::QuestionPool;
use crate::scoreboard::ScoreBoard;

/// Phase of the session state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Collecting the player roster.
    Setup,
    /// Showing the turn banner, scores, and remaining questions.
    TurnStart,
    /// Waiting for a category/value selection.
    AwaitingSelection,
    /// Showing a question and waiting for an answer.
    QuestionPresented,
    /// Applying the answer's effects.
    AnswerResolved,
    /// Terminal; final scores and reports.
    GameOver,
}

/// One interactive game session.
///
/// Generic over the console boundary so the same machine drives a
/// terminal and a scripted test run.
pub struct TurnSession<C: Console> {
    console: C,
    session_id: String,
    roster: Roster,
    pool: QuestionPool,
    history: CommandHistory,
    board: ScoreBoard,
    turns: Vec<TurnRecord>,
    current: usize,
    phase: TurnPhase,
    report_dir: Option<PathBuf>,
}

impl<C: Console> TurnSession<C> {
    /// Creates a session over the given console and question set.
    #[must_use]
    pub fn new(session_id: impl Into<String>, console: C, questions: Vec<Question>) -> Self {
        Self {
            console,
            session_id: session_id.into(),
            roster: Roster::new(),
            pool: QuestionPool::new(questions),
            history: CommandHistory::new(),
            board: ScoreBoard::new(),
            turns: Vec::new(),
            current: 0,
            phase: TurnPhase::Setup,
            report_dir: None,
        }
    }

    /// Builder method to write end-of-game reports into `dir`.
    ///
    /// Without a directory the report is still assembled and returned,
    /// but no files are written.
    #[must_use]
    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = Some(dir.into());
        self
    }

    /// Returns the console, e.g. to inspect a scripted transcript.
    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Returns the session roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the resolved turns so far, in play order.
    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Runs the session to completion and returns the final report.
    ///
    /// # Errors
    ///
    /// Returns an error on unusable numeric input, an out-of-bounds
    /// player count, a console that closes during setup, or a sink/report
    /// write failure. Quitting and end-of-input during play are normal
    /// exits, not errors.
    pub fn run(&mut self, sink: &mut dyn AuditSink) -> Result<SessionReport> {
        sink.record(&AuditEvent::new(&self.session_id, Activity::GameStarted))?;

        self.setup(sink)?;
        self.board.init_players(&self.roster);

        while self.phase != TurnPhase::GameOver && !self.pool.is_empty() {
            self.play_turn(sink)?;
        }
        self.phase = TurnPhase::GameOver;

        self.finish(sink)
    }

    // ===== Setup =====

    fn setup(&mut self, sink: &mut dyn AuditSink) -> Result<()> {
        self.phase = TurnPhase::Setup;

        let count_line = self.read_required("How many players? (1-4): ")?;
        let count_text = count_line.trim();
        let count: u32 = count_text
            .parse()
            .map_err(|_| Error::input_format(count_text, "a player count between 1 and 4"))?;
        if !(1..=4).contains(&count) {
            return Err(Error::player_count(count));
        }

        for n in 1..=count {
            let name_line = self.read_required(&format!("Enter name for Player {n}: "))?;
            let name = name_line.trim().to_string();
            let id = self.roster.join(&name);

            let event = AuditEvent::new(&self.session_id, Activity::PlayerJoined)
                .with_player(id)
                .with_answer(&name);
            sink.record(&event)?;
        }

        Ok(())
    }

    /// Reads a line that setup cannot proceed without.
    fn read_required(&mut self, prompt: &str) -> Result<String> {
        match self.console.read_line(prompt)? {
            ReadLine::Line(line) => Ok(line),
            ReadLine::Eof => Err(Error::console_closed()),
        }
    }

    // ===== Turn Loop =====

    fn play_turn(&mut self, sink: &mut dyn AuditSink) -> Result<()> {
        self.phase = TurnPhase::TurnStart;
        self.print_turn_banner();

        self.phase = TurnPhase::AwaitingSelection;
        let question = loop {
            let category = match self
                .console
                .read_line("Choose a category (or type 'quit' to end game): ")?
            {
                ReadLine::Line(line) => line.trim().to_string(),
                ReadLine::Eof => return self.quit(sink),
            };
            if category.eq_ignore_ascii_case("quit") {
                return self.quit(sink);
            }

            let value_line = match self.console.read_line("Choose a value: ")? {
                ReadLine::Line(line) => line,
                ReadLine::Eof => return self.quit(sink),
            };
            let value_text = value_line.trim();
            let value: u32 = value_text
                .parse()
                .map_err(|_| Error::input_format(value_text, "a numeric point value"))?;

            match self.pool.find(&category, value) {
                Some(found) => break found.clone(),
                None => self.console.print("Question not found. Try again."),
            }
        };

        self.phase = TurnPhase::QuestionPresented;
        self.console
            .print(&format!("\nQuestion: {}", question.prompt()));
        self.console.print("Options:");
        for (key, text) in question.options().iter() {
            self.console.print(&format!("  {key}: {text}"));
        }

        let answer = match self.console.read_line("Your answer (A, B, C, etc.): ")? {
            ReadLine::Line(line) => line.trim().to_ascii_uppercase(),
            ReadLine::Eof => return self.quit(sink),
        };

        self.phase = TurnPhase::AnswerResolved;
        self.resolve_answer(sink, &question, &answer)?;

        self.pool.remove(question.category(), question.value());
        self.current = (self.current + 1) % self.roster.len();
        Ok(())
    }

    fn resolve_answer(
        &mut self,
        sink: &mut dyn AuditSink,
        question: &Question,
        answer: &str,
    ) -> Result<()> {
        let player = self.current_player()?;
        let player_id = player.id();
        let player_name = player.name().to_string();

        let correct = question.accepts_answer(answer);
        let delta = if correct {
            i64::from(question.value())
        } else {
            -i64::from(question.value())
        };

        let command = AnswerCommand::new(player_id, &player_name, question.clone(), answer);
        let mut ctx = TurnContext {
            roster: &mut self.roster,
            observer: &mut self.board,
            sink,
            session_id: &self.session_id,
        };
        self.history.execute_command(Box::new(command), &mut ctx)?;

        let score_after = self
            .roster
            .get(player_id)
            .map(Player::score)
            .unwrap_or_default();

        self.turns.push(TurnRecord::new(
            &player_name,
            question.category(),
            question.value(),
            answer,
            correct,
            delta,
            score_after,
        ));

        self.console.print(&format!(
            "Result: {}",
            if correct { "Correct!" } else { "Wrong!" }
        ));
        self.console
            .print(&format!("Correct answer: {}", question.correct_answer()));
        self.console
            .print(&format!("{player_name}'s new score: {score_after}"));
        Ok(())
    }

    fn print_turn_banner(&mut self) {
        let Some(player) = self.roster.by_position(self.current) else {
            return;
        };
        let name = player.name().to_string();
        let score = player.score();

        self.console
            .print("\n===================================================================");
        self.console
            .print(&format!("                      {name}'s Turn\n"));
        self.console.print(&format!("Current Score: {score}"));
        self.console.print(&self.board.render());
        self.console.print(&self.pool.render_board());
    }

    fn quit(&mut self, sink: &mut dyn AuditSink) -> Result<()> {
        let player = self.current_player()?;
        let event = AuditEvent::new(&self.session_id, Activity::ExitGame)
            .with_player(player.id())
            .with_score(player.score());
        sink.record(&event)?;
        self.phase = TurnPhase::GameOver;
        Ok(())
    }

    fn current_player(&self) -> Result<&Player> {
        self.roster.by_position(self.current).ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!(
                "turn index {} out of roster bounds",
                self.current
            )))
        })
    }

    // ===== Game Over =====

    fn finish(&mut self, sink: &mut dyn AuditSink) -> Result<SessionReport> {
        self.console.print("\n=== GAME OVER ===");
        self.console.print("Final Scores:");
        let score_lines: Vec<String> = self
            .roster
            .iter()
            .map(|p| format!("  {}: {}", p.name(), p.score()))
            .collect();
        for line in score_lines {
            self.console.print(&line);
        }

        let winner = self.roster.leader().map(|p| p.name().to_string());
        if let Some(name) = &winner {
            self.console.print(&format!("Winner: {name}!"));
        }

        let mut report = SessionReport::new(self.session_id.clone());
        for player in self.roster.iter() {
            report = report.with_standing(PlayerStanding::new(
                player.id().to_string(),
                player.name(),
                player.score(),
            ));
        }
        for turn in &self.turns {
            report = report.with_turn(turn.clone());
        }
        if let Some(name) = winner {
            report = report.with_winner(name);
        }

        if let Some(dir) = self.report_dir.clone() {
            self.console.print("Generating reports...");
            let written = write_reports(&report, &dir)?;
            let names: Vec<String> = written
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            self.console
                .print(&format!("Reports generated: {}", names.join(", ")));
            sink.record(&AuditEvent::new(
                &self.session_id,
                Activity::ReportsGenerated,
            ))?;
        }

        Ok(report)
    }
}
