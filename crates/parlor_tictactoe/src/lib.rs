//! Pure tic-tac-toe game logic.
//!
//! - [`Board`]: nine cells, win and full-board detection
//! - [`heuristic`]: win / block / center / random move policy
//! - [`Match`]: multi-round scoring state machine
//! - [`play_match`]: drives a match between two [`MoveSource`]s, reporting to a
//!   [`GameObserver`]
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{Board, Marker, Position, key_for_three_in_row};
//!
//! let x = Marker::new('X').unwrap();
//! let mut board = Board::new();
//! board.mark(1, x).unwrap();
//! board.mark(2, x).unwrap();
//! assert_eq!(key_for_three_in_row(&board, x), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
pub mod heuristic;
mod orchestrator;
mod phases;
mod player;
mod position;
pub mod rules;
mod settings;
mod types;

pub use action::{FrontendError, MatchError, Move};
pub use board::{Board, BoardError};
pub use game::Match;
pub use heuristic::{Decision, HeuristicMover, choose_move, key_for_three_in_row};
pub use orchestrator::{GameEvent, GameObserver, MoveSource, play_match};
pub use phases::{MatchPhase, Outcome};
pub use player::{Player, PlayerKind, Seat};
pub use position::{InvalidCellError, Position};
pub use settings::{DEFAULT_POINTS_TO_WIN, MatchSettings};
pub use types::{Marker, MarkerError, Square};
