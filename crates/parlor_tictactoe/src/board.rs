//! The 3x3 board.

use super::position::{InvalidCellError, Position};
use super::rules;
use super::types::{Marker, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// Always holds exactly nine squares; a fresh or reset board is all blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

/// Errors that can occur when marking the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The cell number is not on the board.
    #[display("{}", _0)]
    InvalidCell(InvalidCellError),

    /// The square already holds a marker.
    #[display("Cell {} is already marked", _0)]
    CellOccupied(Position),
}

impl std::error::Error for BoardError {}

impl From<InvalidCellError> for BoardError {
    fn from(err: InvalidCellError) -> Self {
        BoardError::InvalidCell(err)
    }
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares in cell order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Marks a cell by its number (1-9).
    ///
    /// # Errors
    ///
    /// Fails with [`BoardError::InvalidCell`] for numbers outside 1-9 and
    /// [`BoardError::CellOccupied`] if the cell is already taken.
    #[instrument(skip(self))]
    pub fn mark(&mut self, cell: usize, marker: Marker) -> Result<(), BoardError> {
        let pos = Position::from_number(cell)?;
        self.place(pos, marker)
    }

    /// Marks a position.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, marker: Marker) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::CellOccupied(pos));
        }
        self.squares[pos.index()] = Square::Marked(marker);
        trace!(cell = pos.number(), %marker, "Cell marked");
        Ok(())
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Positions still blank, in ascending cell order.
    pub fn unmarked_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the marker owning a complete line, if any.
    pub fn winner(&self) -> Option<Marker> {
        rules::check_winner(self)
    }

    /// Renders the grid with blank cells left empty.
    pub fn render(&self) -> String {
        self.squares
            .chunks(3)
            .map(|cells| format!(" {} | {} | {} \n", cells[0], cells[1], cells[2]))
            .collect::<Vec<_>>()
            .join("---+---+---\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Marker {
        Marker::new('X').unwrap()
    }

    #[test]
    fn test_new_board_is_blank() {
        let board = Board::new();
        assert_eq!(board.unmarked_cells().len(), 9);
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_mark_by_number() {
        let mut board = Board::new();
        board.mark(5, x()).unwrap();
        assert_eq!(board.get(Position::Center), Square::Marked(x()));
        assert!(!board.unmarked_cells().contains(&Position::Center));
    }

    #[test]
    fn test_mark_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.mark(0, x()),
            Err(BoardError::InvalidCell(InvalidCellError(0)))
        );
        assert_eq!(
            board.mark(10, x()),
            Err(BoardError::InvalidCell(InvalidCellError(10)))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_mark_occupied() {
        let mut board = Board::new();
        let o = Marker::new('O').unwrap();
        board.mark(1, x()).unwrap();
        assert_eq!(
            board.mark(1, o),
            Err(BoardError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(board.get(Position::TopLeft), Square::Marked(x()));
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::new();
        for cell in 1..=9 {
            board.mark(cell, x()).unwrap();
        }
        assert!(board.is_full());
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_render() {
        let mut board = Board::new();
        board.mark(1, x()).unwrap();
        board.mark(5, Marker::new('O').unwrap()).unwrap();
        let expected = " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   |   \n";
        assert_eq!(board.render(), expected);
        assert_eq!(board.to_string(), expected);
    }
}
