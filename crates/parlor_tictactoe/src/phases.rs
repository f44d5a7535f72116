//! Phases of a match and round outcomes.

use super::Seat;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A seat completed a line.
    Winner(Seat),
    /// The board filled without a winning line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Winner(seat) => Some(*seat),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(seat) => write!(f, "{} seat wins", seat),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// Where a match stands.
///
/// ```text
/// AwaitingMove(seat) --play--> AwaitingMove(other) | RoundOver
/// RoundOver --update_score--> ScoreUpdated
/// ScoreUpdated --advance--> NextRound | MatchOver
/// NextRound --start_next_round--> AwaitingMove(first mover)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MatchPhase {
    /// Waiting for the seat to move.
    #[display("awaiting move from {} seat", _0)]
    AwaitingMove(Seat),
    /// The round ended; scores not yet counted.
    #[display("round over ({})", _0)]
    RoundOver(Outcome),
    /// Scores include the last round.
    #[display("score updated")]
    ScoreUpdated,
    /// Nobody reached the threshold; another round follows.
    #[display("next round")]
    NextRound,
    /// A seat reached the threshold.
    #[display("match over ({} seat wins)", _0)]
    MatchOver(Seat),
}
