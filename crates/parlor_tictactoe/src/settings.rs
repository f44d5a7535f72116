//! Match settings.

use super::Seat;
use serde::{Deserialize, Serialize};

/// Points needed to win a match unless configured otherwise.
pub const DEFAULT_POINTS_TO_WIN: u32 = 5;

/// Tunables for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Round wins needed to take the match.
    pub points_to_win: u32,
    /// Seat that opens every round.
    pub first_to_move: Seat,
}

impl MatchSettings {
    /// Creates settings.
    pub fn new(points_to_win: u32, first_to_move: Seat) -> Self {
        Self {
            points_to_win,
            first_to_move,
        }
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self::new(DEFAULT_POINTS_TO_WIN, Seat::First)
    }
}
