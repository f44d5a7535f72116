//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use parlor_tictactoe::{DEFAULT_POINTS_TO_WIN, Marker, MatchSettings, Seat};
use parlor_twentyone::{DEFAULT_DEALER_STANDS_ON, TableSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration file.
///
/// Every table and field is optional; missing values take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tic-tac-toe settings.
    tictactoe: TicTacToeConfig,

    /// Twenty-one settings.
    twentyone: TwentyOneConfig,
}

/// Who opens each tic-tac-toe round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    /// The person at the keyboard.
    #[default]
    Human,
    /// The computer.
    Computer,
}

/// `[tictactoe]` table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Round wins needed to take the match.
    points_to_win: u32,

    /// Who opens each round.
    first_mover: FirstMover,

    /// Marker used by the computer.
    computer_marker: Marker,

    /// Name shown for the computer.
    computer_name: String,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            points_to_win: DEFAULT_POINTS_TO_WIN,
            first_mover: FirstMover::Human,
            computer_marker: Marker::O,
            computer_name: "Computer".to_string(),
        }
    }
}

/// `[twentyone]` table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TwentyOneConfig {
    /// Dealer keeps hitting below this total.
    dealer_stands_on: u32,
}

impl Default for TwentyOneConfig {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEFAULT_DEALER_STANDS_ON,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the tic-tac-toe threshold.
    pub fn set_points_to_win(&mut self, points: u32) {
        self.tictactoe.points_to_win = points;
    }

    /// Overrides the tic-tac-toe first mover.
    pub fn set_first_mover(&mut self, first_mover: FirstMover) {
        self.tictactoe.first_mover = first_mover;
    }

    /// Overrides the dealer stand total.
    pub fn set_dealer_stands_on(&mut self, total: u32) {
        self.twentyone.dealer_stands_on = total;
    }

    /// Match settings with the human in the first seat.
    pub fn match_settings(&self) -> MatchSettings {
        let first_to_move = match self.tictactoe.first_mover {
            FirstMover::Human => Seat::First,
            FirstMover::Computer => Seat::Second,
        };
        MatchSettings::new(self.tictactoe.points_to_win, first_to_move)
    }

    /// Twenty-one table rules.
    pub fn table_settings(&self) -> TableSettings {
        TableSettings {
            dealer_stands_on: self.twentyone.dealer_stands_on,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.tictactoe().points_to_win(), 5);
        assert_eq!(config.tictactoe().computer_marker().as_char(), 'O');
        assert_eq!(*config.twentyone().dealer_stands_on(), 17);
        assert_eq!(config.match_settings().first_to_move, Seat::First);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[tictactoe]\npoints_to_win = 3\nfirst_mover = \"computer\"\ncomputer_marker = \"@\""
        )
        .unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.tictactoe().points_to_win(), 3);
        assert_eq!(config.tictactoe().computer_marker().as_char(), '@');
        assert_eq!(config.tictactoe().computer_name(), "Computer");
        assert_eq!(config.match_settings().first_to_move, Seat::Second);
        assert_eq!(config.table_settings(), TableSettings::default());
    }

    #[test]
    fn test_invalid_marker_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tictactoe]\ncomputer_marker = \"OO\"").unwrap();
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_overrides() {
        let mut config = GameConfig::default();
        config.set_points_to_win(2);
        config.set_first_mover(FirstMover::Computer);
        config.set_dealer_stands_on(16);
        assert_eq!(
            config.match_settings(),
            MatchSettings::new(2, Seat::Second)
        );
        assert_eq!(config.table_settings().dealer_stands_on, 16);
    }
}
