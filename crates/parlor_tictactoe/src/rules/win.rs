//! Win detection logic for tic-tac-toe.

use super::super::{Board, Marker, Position};
use tracing::instrument;

/// The eight lines that win a round: rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Lines are scanned in declaration order. Returns the marker filling
/// the first uniform line, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            sq.marker()
        } else {
            None
        }
    })
}

/// Winning lines passing through a position, in declaration order.
pub fn lines_through(pos: Position) -> impl Iterator<Item = &'static [Position; 3]> {
    WINNING_LINES.iter().filter(move |line| line.contains(&pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(c: char) -> Marker {
        Marker::new(c).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for cell in [1, 2, 3] {
            board.mark(cell, marker('X')).unwrap();
        }
        assert_eq!(check_winner(&board), Some(marker('X')));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        for cell in [3, 5, 7] {
            board.mark(cell, marker('O')).unwrap();
        }
        assert_eq!(check_winner(&board), Some(marker('O')));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.mark(1, marker('X')).unwrap();
        board.mark(2, marker('X')).unwrap();
        board.mark(3, marker('O')).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_lines_through_center() {
        assert_eq!(lines_through(Position::Center).count(), 4);
        assert_eq!(lines_through(Position::TopLeft).count(), 3);
        assert_eq!(lines_through(Position::TopCenter).count(), 2);
    }
}
