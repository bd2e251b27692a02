//! Reversible commands.
//!
//! A command is a unit of work that can be applied once and reversed
//! once. Commands do not own game state; every call borrows the session's
//! collaborators through a [`TurnContext`], so the turn engine keeps sole
//! ownership between calls.

use lectern_audit::{Activity, AnswerResult, AuditEvent, AuditSink};
use lectern_core::{Error, ErrorKind, PlayerId, Question, Result, Roster};

use crate::scoreboard::ScoreObserver;

// =============================================================================
// Command State
// =============================================================================

/// Lifecycle tag for one command instance.
///
/// `execute` is valid only from `Unexecuted`; calling it again is a
/// checked error. `undo` is a no-op from any state other than `Executed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommandState {
    /// Never executed.
    #[default]
    Unexecuted,
    /// Executed and eligible for undo.
    Executed,
    /// Undone; terminal.
    Undone,
}

impl CommandState {
    /// Returns the lowercase state name used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Unexecuted => "unexecuted",
            Self::Executed => "executed",
            Self::Undone => "undone",
        }
    }
}

// =============================================================================
// Turn Context
// =============================================================================

/// Mutable collaborators borrowed by a command for one call.
pub struct TurnContext<'a> {
    /// The session roster; commands mutate player scores through it.
    pub roster: &'a mut Roster,
    /// Observer notified after every score change.
    pub observer: &'a mut dyn ScoreObserver,
    /// Audit sink receiving emitted events.
    pub sink: &'a mut dyn AuditSink,
    /// Session id stamped on emitted events.
    pub session_id: &'a str,
}

// =============================================================================
// Command Trait
// =============================================================================

/// A reversible unit of work.
pub trait Command {
    /// Applies the command's effect.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CommandReplay`] when called from any state
    /// other than [`CommandState::Unexecuted`], or the underlying failure
    /// if a collaborator rejects the effect.
    fn execute(&mut self, ctx: &mut TurnContext<'_>) -> Result<()>;

    /// Reverses a previously applied effect. No-op unless the command is
    /// currently executed.
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator rejects the reversal.
    fn undo(&mut self, ctx: &mut TurnContext<'_>) -> Result<()>;

    /// One-line human-readable description.
    fn describe(&self) -> String;

    /// Current lifecycle state.
    fn state(&self) -> CommandState;
}

// =============================================================================
// Answer Command
// =============================================================================

#[derive(Clone, Copy, Debug)]
struct Outcome {
    correct: bool,
    delta: i64,
}

/// Evaluates one answer and applies the resulting score change.
///
/// On execute: scores the given answer against the question, applies the
/// signed delta to the player, notifies the score observer, and emits one
/// `Answer Question` audit event. On undo: applies the negated delta and
/// re-notifies the observer. The audit trail is append-only, so undo
/// emits nothing and retracts nothing.
pub struct AnswerCommand {
    player: PlayerId,
    player_name: String,
    question: Question,
    given_answer: String,
    state: CommandState,
    outcome: Option<Outcome>,
}

impl AnswerCommand {
    /// Creates an unexecuted answer command.
    #[must_use]
    pub fn new(
        player: PlayerId,
        player_name: impl Into<String>,
        question: Question,
        given_answer: impl Into<String>,
    ) -> Self {
        Self {
            player,
            player_name: player_name.into(),
            question,
            given_answer: given_answer.into(),
            state: CommandState::Unexecuted,
            outcome: None,
        }
    }

    /// Whether the evaluated answer matched; `None` before execution.
    #[must_use]
    pub fn correct(&self) -> Option<bool> {
        self.outcome.map(|o| o.correct)
    }

    /// The signed score change applied; `None` before execution.
    #[must_use]
    pub fn delta(&self) -> Option<i64> {
        self.outcome.map(|o| o.delta)
    }

    fn missing_player(&self) -> Error {
        Error::new(ErrorKind::Internal(format!(
            "player {} not in roster",
            self.player
        )))
    }
}

impl Command for AnswerCommand {
    fn execute(&mut self, ctx: &mut TurnContext<'_>) -> Result<()> {
        if self.state != CommandState::Unexecuted {
            return Err(Error::command_replay(self.state.name()));
        }

        let correct = self.question.accepts_answer(&self.given_answer);
        let value = i64::from(self.question.value());
        let delta = if correct { value } else { -value };

        // Record the event before mutating, so a sink failure leaves the
        // roster untouched and the command unexecuted.
        let score_after = ctx
            .roster
            .get(self.player)
            .ok_or_else(|| self.missing_player())?
            .score()
            + delta;

        let result = if correct {
            AnswerResult::Correct
        } else {
            AnswerResult::Incorrect
        };
        let event = AuditEvent::new(ctx.session_id, Activity::AnswerQuestion)
            .with_player(self.player)
            .with_question(self.question.category(), self.question.value())
            .with_answer(&self.given_answer)
            .with_result(result)
            .with_score(score_after);
        ctx.sink.record(&event)?;

        let player = ctx
            .roster
            .get_mut(self.player)
            .ok_or_else(|| self.missing_player())?;
        player.apply_delta(delta);
        ctx.observer.update(player);

        self.outcome = Some(Outcome { correct, delta });
        self.state = CommandState::Executed;
        Ok(())
    }

    fn undo(&mut self, ctx: &mut TurnContext<'_>) -> Result<()> {
        if self.state != CommandState::Executed {
            return Ok(());
        }

        if let Some(outcome) = self.outcome {
            let player = ctx
                .roster
                .get_mut(self.player)
                .ok_or_else(|| self.missing_player())?;
            player.apply_delta(-outcome.delta);
            ctx.observer.update(player);
        }

        self.state = CommandState::Undone;
        Ok(())
    }

    fn describe(&self) -> String {
        format!(
            "{} answers {} for {}",
            self.player_name,
            self.question.category(),
            self.question.value()
        )
    }

    fn state(&self) -> CommandState {
        self.state
    }
}
