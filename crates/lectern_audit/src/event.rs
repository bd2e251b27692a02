//! Audit event and activity types.
//!
//! Every notable game action becomes one event record. Events carry the
//! full column set of the log schema; fields that do not apply to an
//! activity stay `None` and render as empty cells.

use std::fmt;

use chrono::{DateTime, Utc};
use lectern_core::PlayerId;

// =============================================================================
// Activity
// =============================================================================

/// The activity tags recorded in the audit trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    /// A session began.
    GameStarted,
    /// A player entered the roster during setup.
    PlayerJoined,
    /// A player answered a question.
    AnswerQuestion,
    /// A player quit mid-game.
    ExitGame,
    /// End-of-game reports were written.
    ReportsGenerated,
}

impl Activity {
    /// Returns the tag string used in the log.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::GameStarted => "Game Started",
            Self::PlayerJoined => "Player Joined",
            Self::AnswerQuestion => "Answer Question",
            Self::ExitGame => "Exit Game",
            Self::ReportsGenerated => "Reports Generated",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// Answer Result
// =============================================================================

/// Correctness tag for an answer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerResult {
    /// The given key matched the correct answer.
    Correct,
    /// The given key did not match.
    Incorrect,
}

impl AnswerResult {
    /// Returns the tag string used in the log.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Correct => "Correct",
            Self::Incorrect => "Incorrect",
        }
    }
}

impl fmt::Display for AnswerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// Audit Event
// =============================================================================

/// One append-only audit record.
#[derive(Clone, Debug)]
pub struct AuditEvent {
    /// The session this event belongs to.
    pub session_id: String,
    /// The acting player, when one exists.
    pub player: Option<PlayerId>,
    /// What happened.
    pub activity: Activity,
    /// When the event was created.
    pub timestamp: DateTime<Utc>,
    /// Question category, for answer events.
    pub category: Option<String>,
    /// Question value, for answer events.
    pub value: Option<u32>,
    /// The answer as given; carries the player name for join events.
    pub answer: Option<String>,
    /// Correctness, for answer events.
    pub result: Option<AnswerResult>,
    /// The acting player's score after this event.
    pub score_after: i64,
}

impl AuditEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(session_id: impl Into<String>, activity: Activity) -> Self {
        Self {
            session_id: session_id.into(),
            player: None,
            activity,
            timestamp: Utc::now(),
            category: None,
            value: None,
            answer: None,
            result: None,
            score_after: 0,
        }
    }

    /// Sets the acting player.
    #[must_use]
    pub fn with_player(mut self, player: PlayerId) -> Self {
        self.player = Some(player);
        self
    }

    /// Sets the question category and value.
    #[must_use]
    pub fn with_question(mut self, category: impl Into<String>, value: u32) -> Self {
        self.category = Some(category.into());
        self.value = Some(value);
        self
    }

    /// Sets the given-answer column.
    #[must_use]
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Sets the correctness tag.
    #[must_use]
    pub fn with_result(mut self, result: AnswerResult) -> Self {
        self.result = Some(result);
        self
    }

    /// Sets the score-after column.
    #[must_use]
    pub fn with_score(mut self, score: i64) -> Self {
        self.score_after = score;
        self
    }
}
