//! Multi-round match engine.
//!
//! A [`Match`] owns the board and both players. Every operation checks
//! the current [`MatchPhase`] first, so rounds can only be driven through
//! the legal sequence of transitions.

use super::action::{MatchError, Move};
use super::phases::{MatchPhase, Outcome};
use super::rules;
use super::settings::MatchSettings;
use super::{Board, Player, Position, Seat};
use tracing::{debug, info, instrument};

/// Tic-tac-toe match between two players.
#[derive(Debug, Clone)]
pub struct Match {
    settings: MatchSettings,
    players: [Player; 2],
    board: Board,
    phase: MatchPhase,
    round: u32,
    history: Vec<Move>,
}

impl Match {
    /// Creates a match and opens its first round.
    ///
    /// # Errors
    ///
    /// Rejects players sharing a marker and a zero points-to-win.
    #[instrument(skip(first, second), fields(first = %first, second = %second))]
    pub fn new(settings: MatchSettings, first: Player, second: Player) -> Result<Self, MatchError> {
        if first.marker() == second.marker() {
            return Err(MatchError::DuplicateMarker(*first.marker()));
        }
        if settings.points_to_win == 0 {
            return Err(MatchError::ZeroPointsToWin);
        }

        info!("Match created");
        Ok(Self {
            settings,
            players: [first, second],
            board: Board::new(),
            phase: MatchPhase::AwaitingMove(settings.first_to_move),
            round: 1,
            history: Vec::new(),
        })
    }

    /// Returns the settings.
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Returns the player in a seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns both players, first seat first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Current round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Moves played in the current round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Seat to move, if a move is expected.
    pub fn to_move(&self) -> Option<Seat> {
        match self.phase {
            MatchPhase::AwaitingMove(seat) => Some(seat),
            _ => None,
        }
    }

    /// Match winner once the match is over.
    pub fn champion(&self) -> Option<&Player> {
        match self.phase {
            MatchPhase::MatchOver(seat) => Some(self.player(seat)),
            _ => None,
        }
    }

    /// Places the current player's marker.
    ///
    /// Stays in `AwaitingMove` with the other seat, or moves to
    /// `RoundOver` on a win or a full board.
    ///
    /// # Errors
    ///
    /// `WrongPhase` outside `AwaitingMove`; `Board` if the cell is taken.
    /// A failed move leaves the match untouched.
    #[instrument(skip(self), fields(round = self.round, phase = %self.phase))]
    pub fn play(&mut self, position: Position) -> Result<MatchPhase, MatchError> {
        let MatchPhase::AwaitingMove(seat) = self.phase else {
            return Err(MatchError::WrongPhase(self.phase));
        };

        let marker = *self.player(seat).marker();
        self.board.place(position, marker)?;
        self.history.push(Move::new(seat, position));

        self.phase = if let Some(winner) = self.board.winner() {
            let winner = self.seat_of(winner).unwrap_or(seat);
            MatchPhase::RoundOver(Outcome::Winner(winner))
        } else if rules::is_tie(&self.board) {
            MatchPhase::RoundOver(Outcome::Tie)
        } else {
            MatchPhase::AwaitingMove(seat.other())
        };

        debug!(cell = position.number(), next = %self.phase, "Move applied");
        Ok(self.phase)
    }

    /// Credits the round winner.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn update_score(&mut self) -> Result<MatchPhase, MatchError> {
        let MatchPhase::RoundOver(outcome) = self.phase else {
            return Err(MatchError::WrongPhase(self.phase));
        };

        if let Some(seat) = outcome.winner() {
            self.players[seat.index()].award_point();
        }
        self.phase = MatchPhase::ScoreUpdated;
        debug!(
            first = self.players[0].score(),
            second = self.players[1].score(),
            "Scores updated"
        );
        Ok(self.phase)
    }

    /// Decides whether the match continues.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn advance(&mut self) -> Result<MatchPhase, MatchError> {
        if self.phase != MatchPhase::ScoreUpdated {
            return Err(MatchError::WrongPhase(self.phase));
        }

        let threshold = self.settings.points_to_win;
        self.phase = [Seat::First, Seat::Second]
            .into_iter()
            .find(|&seat| *self.player(seat).score() >= threshold)
            .map_or(MatchPhase::NextRound, MatchPhase::MatchOver);

        if let MatchPhase::MatchOver(seat) = self.phase {
            info!(champion = %self.player(seat), "Match over");
        }
        Ok(self.phase)
    }

    /// Clears the board and hands the move to the first mover.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn start_next_round(&mut self) -> Result<MatchPhase, MatchError> {
        if self.phase != MatchPhase::NextRound {
            return Err(MatchError::WrongPhase(self.phase));
        }

        self.board.reset();
        self.history.clear();
        self.round += 1;
        self.phase = MatchPhase::AwaitingMove(self.settings.first_to_move);
        debug!(round = self.round, "Round started");
        Ok(self.phase)
    }

    fn seat_of(&self, marker: super::Marker) -> Option<Seat> {
        [Seat::First, Seat::Second]
            .into_iter()
            .find(|&seat| *self.player(seat).marker() == marker)
    }
}
