//! Player identity and scoring.
//!
//! Players are created once at session setup and live for the whole game.
//! Scores change only through signed deltas applied by answer commands, so
//! they can go negative without bound.

use std::fmt;

/// Stable player identifier within one session.
///
/// Ids are assigned in join order starting at 1 and display as `P1`, `P2`,
/// and so on. Two players may share a display name; ids never collide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Creates a player id from a 1-based seat number.
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Returns the 1-based seat number.
    #[must_use]
    pub const fn seat(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A contestant with a stable id, display name, and signed score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    score: i64,
}

impl Player {
    /// Creates a player with a zero score.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }

    /// Returns the player id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Applies a signed score delta.
    pub fn apply_delta(&mut self, delta: i64) {
        self.score += delta;
    }
}

/// Ordered list of the players in one session.
///
/// Join order is turn order; the round-robin index in the turn engine walks
/// this list. The roster owns the players and is the source of truth for
/// scores (the score board is a derived cache).
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Adds a player, assigning the next seat id, and returns that id.
    pub fn join(&mut self, name: impl Into<String>) -> PlayerId {
        let seat = u8::try_from(self.players.len() + 1).unwrap_or(u8::MAX);
        let id = PlayerId::new(seat);
        self.players.push(Player::new(id, name));
        id
    }

    /// Returns the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if no players have joined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Looks a player up by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Looks a player up by id for mutation.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    /// Returns the player at a turn-order position.
    #[must_use]
    pub fn by_position(&self, position: usize) -> Option<&Player> {
        self.players.get(position)
    }

    /// Iterates the players in join order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Returns the player with the strictly highest score.
    ///
    /// Ties go to the earliest joiner: a later player must exceed, not
    /// merely match, the current best to take the lead.
    #[must_use]
    pub fn leader(&self) -> Option<&Player> {
        self.players.iter().fold(None, |best, p| match best {
            Some(b) if p.score() <= b.score() => Some(b),
            _ => Some(p),
        })
    }
}
