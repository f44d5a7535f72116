//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from
//! board storage so the heuristic and the match engine share them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{WINNING_LINES, check_winner, lines_through};
