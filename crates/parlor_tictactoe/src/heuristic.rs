//! Move selection for the computer player.
//!
//! The policy is a strict priority list; the first rule that yields a
//! cell wins:
//!
//! 1. complete one of our own lines
//! 2. block an opponent line
//! 3. take the center
//! 4. any blank cell, uniformly at random

use super::rules::lines_through;
use super::{Board, Marker, Match, MatchError, MoveSource, Position, Seat, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the policy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Decision {
    /// Completes a line for the mover.
    #[display("win")]
    Win,
    /// Stops the opponent completing a line.
    #[display("block")]
    Block,
    /// Takes the center cell.
    #[display("center")]
    Center,
    /// Random blank cell.
    #[display("random")]
    Random,
}

/// Finds a blank cell that would complete a line of `marker`.
///
/// Blank cells are examined in ascending order and, for each, the
/// winning lines through it in declaration order. The first cell whose
/// line-mates are both `marker` is returned.
#[instrument(skip(board))]
pub fn key_for_three_in_row(board: &Board, marker: Marker) -> Option<Position> {
    board.unmarked_cells().into_iter().find(|&cell| {
        lines_through(cell).any(|line| {
            line.iter()
                .filter(|&&pos| pos != cell)
                .all(|&pos| board.get(pos) == Square::Marked(marker))
        })
    })
}

/// Picks a move for `own` against `opponent`.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Option<(Position, Decision)> {
    let choice = key_for_three_in_row(board, own)
        .map(|pos| (pos, Decision::Win))
        .or_else(|| key_for_three_in_row(board, opponent).map(|pos| (pos, Decision::Block)))
        .or_else(|| {
            board
                .is_empty(Position::Center)
                .then_some((Position::Center, Decision::Center))
        })
        .or_else(|| {
            board
                .unmarked_cells()
                .choose(rng)
                .map(|&pos| (pos, Decision::Random))
        });

    if let Some((pos, decision)) = choice {
        debug!(cell = pos.number(), %decision, "Computer chose move");
    }
    choice
}

/// Computer-controlled move source backed by [`choose_move`].
#[derive(Debug, Clone)]
pub struct HeuristicMover<R> {
    rng: R,
}

impl<R: Rng> HeuristicMover<R> {
    /// Creates a mover drawing random fallbacks from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a move; see [`choose_move`].
    pub fn choose(
        &mut self,
        board: &Board,
        own: Marker,
        opponent: Marker,
    ) -> Option<(Position, Decision)> {
        choose_move(board, own, opponent, &mut self.rng)
    }
}

impl<R: Rng> MoveSource for HeuristicMover<R> {
    fn next_move(
        &mut self,
        game: &Match,
        seat: Seat,
    ) -> Result<(Position, Option<Decision>), MatchError> {
        let own = *game.player(seat).marker();
        let opponent = *game.player(seat.other()).marker();
        let (position, decision) = self
            .choose(game.board(), own, opponent)
            .ok_or(MatchError::NoMoveAvailable)?;
        Ok((position, Some(decision)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn marker(c: char) -> Marker {
        Marker::new(c).unwrap()
    }

    fn board_from(layout: &str) -> Board {
        let mut board = Board::new();
        for (i, c) in layout.chars().enumerate() {
            if c != '.' {
                board.mark(i + 1, marker(c)).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_key_completes_top_row() {
        let board = board_from("XX.......");
        assert_eq!(
            key_for_three_in_row(&board, marker('X')),
            Some(Position::TopRight)
        );
        assert_eq!(key_for_three_in_row(&board, marker('O')), None);
    }

    #[test]
    fn test_key_finds_gap_in_middle_of_line() {
        let board = board_from("X.......X");
        assert_eq!(
            key_for_three_in_row(&board, marker('X')),
            Some(Position::Center)
        );
    }

    #[test]
    fn test_key_ignores_mixed_lines() {
        let board = board_from("XO.......");
        assert_eq!(key_for_three_in_row(&board, marker('X')), None);
    }

    #[test]
    fn test_key_returns_lowest_cell_first() {
        // X can finish at 3 (top row) or 7 (left column).
        let board = board_from("XX.X.....");
        assert_eq!(
            key_for_three_in_row(&board, marker('X')),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_win_beats_block() {
        // O to move: O wins at 6, X threatens 3.
        let board = board_from("XX.OO....");
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose_move(&board, marker('O'), marker('X'), &mut rng),
            Some((Position::MiddleRight, Decision::Win))
        );
    }

    #[test]
    fn test_block() {
        let board = board_from("XX..O....");
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose_move(&board, marker('O'), marker('X'), &mut rng),
            Some((Position::TopRight, Decision::Block))
        );
    }

    #[test]
    fn test_center_when_no_threats() {
        let board = board_from("X........");
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose_move(&board, marker('O'), marker('X'), &mut rng),
            Some((Position::Center, Decision::Center))
        );
    }

    #[test]
    fn test_random_picks_blank_cell() {
        let board = board_from("X...O....");
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (pos, decision) = choose_move(&board, marker('O'), marker('X'), &mut rng).unwrap();
            assert_eq!(decision, Decision::Random);
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from("XOXOXXOXO");
        let mut mover = HeuristicMover::new(StdRng::seed_from_u64(1));
        assert_eq!(mover.choose(&board, marker('O'), marker('X')), None);
    }
}
