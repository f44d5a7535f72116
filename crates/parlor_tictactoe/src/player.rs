//! Match participants.

use super::Marker;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Seat {
    /// Seat listed first when the match was created.
    #[display("first")]
    First,
    /// Seat listed second when the match was created.
    #[display("second")]
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// How a player's moves are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from outside the engine.
    #[display("human")]
    Human,
    /// Moves come from the heuristic.
    #[display("computer")]
    Computer,
}

/// A named player with a marker and a running score.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed on the board.
    marker: Marker,
    /// Rounds won so far in the current match.
    score: u32,
    /// Who chooses this player's moves.
    kind: PlayerKind,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(name: impl Into<String>, marker: Marker, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            marker,
            score: 0,
            kind,
        }
    }

    /// Creates a human-controlled player.
    pub fn human(name: impl Into<String>, marker: Marker) -> Self {
        Self::new(name, marker, PlayerKind::Human)
    }

    /// Creates a computer-controlled player.
    pub fn computer(name: impl Into<String>, marker: Marker) -> Self {
        Self::new(name, marker, PlayerKind::Computer)
    }

    /// Checks whether the heuristic drives this player.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    pub(crate) fn award_point(&mut self) {
        self.score += 1;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_alternates() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other().other(), Seat::Second);
    }

    #[test]
    fn test_player_starts_scoreless() {
        let mut player = Player::computer("Hal", Marker::new('O').unwrap());
        assert_eq!(*player.score(), 0);
        assert!(player.is_computer());
        player.award_point();
        assert_eq!(*player.score(), 1);
        assert_eq!(player.to_string(), "Hal (O)");
    }
}
