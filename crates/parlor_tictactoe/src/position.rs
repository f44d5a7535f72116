//! Board positions, numbered 1-9 in reading order.

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Cells are numbered the way a player reads the board:
///
/// ```text
///  1 | 2 | 3
/// ---+---+---
///  4 | 5 | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

/// A cell number outside 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Cell {} is out of range (must be 1-9)", _0)]
pub struct InvalidCellError(pub usize);

impl std::error::Error for InvalidCellError {}

impl Position {
    /// All 9 positions in cell order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Cell number as shown to players (1-9).
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Zero-based storage index (0-8).
    pub(crate) fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Looks up the position for a cell number (1-9).
    #[instrument]
    pub fn from_number(cell: usize) -> Result<Self, InvalidCellError> {
        cell.checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(InvalidCellError(cell))
    }
}

impl TryFrom<usize> for Position {
    type Error = InvalidCellError;

    fn try_from(cell: usize) -> Result<Self, Self::Error> {
        Self::from_number(cell)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_numbers_follow_reading_order() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.number(), i + 1);
            assert_eq!(Position::from_number(i + 1), Ok(pos));
        }
    }

    #[test]
    fn test_out_of_range_cells() {
        assert_eq!(Position::from_number(0), Err(InvalidCellError(0)));
        assert_eq!(Position::from_number(10), Err(InvalidCellError(10)));
    }

    #[test]
    fn test_center_is_five() {
        assert_eq!(Position::Center.number(), 5);
        assert_eq!(Position::Center.label(), "Center");
    }
}
