//! Moves and match errors.

use super::{BoardError, Marker, MatchPhase, Position, Seat};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move: a seat placing its marker at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The seat making the move.
    pub seat: Seat,
    /// Where the marker goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(seat: Seat, position: Position) -> Self {
        Self { seat, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} seat -> cell {}", self.seat, self.position)
    }
}

/// Error that can occur while running a match.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MatchError {
    /// The operation is not valid in the current phase.
    #[display("Not allowed while {}", _0)]
    WrongPhase(MatchPhase),

    /// The board rejected the move.
    #[display("{}", _0)]
    Board(BoardError),

    /// Both players asked for the same marker.
    #[display("Both players use marker {}", _0)]
    DuplicateMarker(Marker),

    /// A match that can never be won.
    #[display("Points to win must be at least 1")]
    ZeroPointsToWin,

    /// The computer found no blank cell.
    #[display("No move available")]
    NoMoveAvailable,

    /// The frontend failed to supply input.
    #[display("{}", _0)]
    Frontend(FrontendError),
}

impl std::error::Error for MatchError {}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

impl From<FrontendError> for MatchError {
    fn from(err: FrontendError) -> Self {
        MatchError::Frontend(err)
    }
}

/// Frontend failure with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Frontend error: {} at {}:{}", message, file, line)]
pub struct FrontendError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl FrontendError {
    /// Creates a new frontend error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for FrontendError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
