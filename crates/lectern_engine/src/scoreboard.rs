//! Score board and observer.
//!
//! The board is a derived cache over the roster: it is seeded once at
//! session start and refreshed through [`ScoreObserver`] notifications.
//! The `Player` entity stays authoritative. Entries are keyed by
//! [`PlayerId`], so two players sharing a display name never collide.

use std::collections::BTreeMap;

use lectern_core::{Player, PlayerId, Roster};

/// Notified after every score change.
///
/// Push-based and synchronous; the engine holds the single subscriber.
pub trait ScoreObserver {
    /// Called with the player whose score just changed.
    fn update(&mut self, player: &Player);
}

#[derive(Clone, Debug)]
struct BoardEntry {
    name: String,
    score: i64,
}

/// Line-per-player score display, ordered by player id.
#[derive(Clone, Debug, Default)]
pub struct ScoreBoard {
    scores: BTreeMap<PlayerId, BoardEntry>,
}

impl ScoreBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the board and reseeds it from the roster's current scores.
    pub fn init_players(&mut self, roster: &Roster) {
        self.scores.clear();
        for player in roster.iter() {
            self.update(player);
        }
    }

    /// Returns the number of tracked players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns `true` if no players are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Returns the tracked score for a player, if present.
    #[must_use]
    pub fn score_of(&self, id: PlayerId) -> Option<i64> {
        self.scores.get(&id).map(|entry| entry.score)
    }

    /// Renders the board, one newline-terminated line per player in id
    /// order, preceded by a `ScoreBoard` header line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("ScoreBoard\n");
        for entry in self.scores.values() {
            out.push_str(&entry.name);
            out.push_str(": ");
            out.push_str(&entry.score.to_string());
            out.push('\n');
        }
        out
    }
}

impl ScoreObserver for ScoreBoard {
    fn update(&mut self, player: &Player) {
        self.scores.insert(
            player.id(),
            BoardEntry {
                name: player.name().to_string(),
                score: player.score(),
            },
        );
    }
}
