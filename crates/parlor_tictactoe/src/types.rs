//! Core value types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single-character token claiming a cell on the board.
///
/// Markers are validated on construction: exactly one character,
/// and never whitespace (a blank cell would be indistinguishable).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "char", into = "char")]
pub struct Marker(char);

impl Marker {
    /// Conventional marker of the opening player.
    pub const X: Marker = Marker('X');

    /// Conventional marker of the second player.
    pub const O: Marker = Marker('O');

    /// Creates a marker from a character.
    pub fn new(c: char) -> Result<Self, MarkerError> {
        if c.is_whitespace() || c.is_control() {
            return Err(MarkerError::Blank);
        }
        Ok(Self(c))
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Marker {
    type Error = MarkerError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}

impl FromStr for Marker {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(MarkerError::Empty),
            (Some(c), None) => Self::new(c),
            (Some(_), Some(_)) => Err(MarkerError::TooLong(s.to_string())),
        }
    }
}

/// Error raised when a marker cannot be built from user input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MarkerError {
    /// No character was given.
    #[display("Marker must not be empty")]
    Empty,

    /// More than one character was given.
    #[display("Marker must be a single character, got {:?}", _0)]
    TooLong(String),

    /// The character would render as a blank cell.
    #[display("Marker must not be whitespace")]
    Blank,
}

impl std::error::Error for MarkerError {}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Nobody has claimed the square.
    #[default]
    Empty,
    /// Square claimed with a marker.
    Marked(Marker),
}

impl Square {
    /// Returns the marker occupying the square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }

    /// Checks whether the square is blank.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, " "),
            Square::Marked(marker) => write!(f, "{}", marker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_parses_single_char() {
        assert_eq!("X".parse::<Marker>().unwrap().as_char(), 'X');
        assert_eq!("é".parse::<Marker>().unwrap().as_char(), 'é');
    }

    #[test]
    fn test_marker_rejects_bad_input() {
        assert_eq!("".parse::<Marker>(), Err(MarkerError::Empty));
        assert_eq!(
            "XO".parse::<Marker>(),
            Err(MarkerError::TooLong("XO".to_string()))
        );
        assert_eq!(" ".parse::<Marker>(), Err(MarkerError::Blank));
    }

    #[test]
    fn test_square_marker() {
        let x = Marker::new('X').unwrap();
        assert_eq!(Square::Marked(x).marker(), Some(x));
        assert_eq!(Square::Empty.marker(), None);
        assert!(Square::default().is_empty());
        assert_eq!(Marker::X.as_char(), 'X');
    }
}
