//! Full-board and tie detection.

use super::super::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (all squares marked).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board without a winning line.
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::Marker;
    use super::*;

    fn fill(board: &mut Board, layout: &str) {
        for (i, c) in layout.chars().enumerate() {
            board.mark(i + 1, Marker::new(c).unwrap()).unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.mark(5, Marker::new('X').unwrap()).unwrap();
        assert!(!is_full(&board));
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_tie_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(&mut board, "XOXOXXOXO");
        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let mut board = Board::new();
        // X X X / O O X / O X O
        fill(&mut board, "XXXOOXOXO");
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
