//! Drives a match between two move sources.
//!
//! [`play_match`] owns no display logic. It mutates the [`Match`], asks
//! each seat's [`MoveSource`] for a cell, and reports every transition
//! to a [`GameObserver`] as a [`GameEvent`].

use super::action::{FrontendError, MatchError};
use super::game::Match;
use super::heuristic::Decision;
use super::phases::{MatchPhase, Outcome};
use super::{Position, Seat};
use tracing::{debug, info, instrument, warn};

/// Messages sent from the game loop to the observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A round began with an empty board.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
    },
    /// A marker was placed.
    MoveMade {
        /// Who moved.
        seat: Seat,
        /// Where.
        position: Position,
        /// Heuristic rule, for computer moves.
        decision: Option<Decision>,
    },
    /// A move source asked for a cell the board refused.
    MoveRejected {
        /// Who asked.
        seat: Seat,
        /// What the board said.
        reason: String,
    },
    /// The round ended.
    RoundOver(Outcome),
    /// Scores now include the last round.
    ScoreUpdated {
        /// Scores by seat, first seat first.
        scores: [u32; 2],
    },
    /// A seat reached the points-to-win threshold.
    MatchOver {
        /// The champion.
        champion: Seat,
    },
}

/// Anything able to pick a cell for a seat.
pub trait MoveSource {
    /// Picks a cell for `seat`.
    ///
    /// The decision is the heuristic rule behind the pick, `None` for
    /// human input. Only undecided picks are re-asked when the board
    /// refuses them.
    fn next_move(
        &mut self,
        game: &Match,
        seat: Seat,
    ) -> Result<(Position, Option<Decision>), MatchError>;
}

/// Display capability injected into the game loop.
pub trait GameObserver {
    /// Observes a transition. The match already reflects it.
    fn notify(&mut self, game: &Match, event: &GameEvent) -> Result<(), FrontendError>;

    /// Asked between rounds; `false` abandons the match.
    fn play_next_round(&mut self, _game: &Match) -> Result<bool, FrontendError> {
        Ok(true)
    }
}

/// Collects events and always plays on.
impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, _game: &Match, event: &GameEvent) -> Result<(), FrontendError> {
        self.push(event.clone());
        Ok(())
    }
}

/// Plays `game` to completion.
///
/// `sources` are indexed by seat, first seat first. Returns the
/// champion, or `None` if the observer declined another round.
#[instrument(skip_all, fields(round = game.round()))]
pub fn play_match<O: GameObserver + ?Sized>(
    game: &mut Match,
    mut sources: [&mut dyn MoveSource; 2],
    observer: &mut O,
) -> Result<Option<Seat>, MatchError> {
    info!("Starting match");
    observer.notify(game, &GameEvent::RoundStarted { round: game.round() })?;

    loop {
        match game.phase() {
            MatchPhase::AwaitingMove(seat) => {
                take_turn(game, &mut *sources[seat.index()], observer, seat)?
            }
            MatchPhase::RoundOver(outcome) => {
                observer.notify(game, &GameEvent::RoundOver(outcome))?;
                game.update_score()?;
                let scores = [
                    *game.player(Seat::First).score(),
                    *game.player(Seat::Second).score(),
                ];
                observer.notify(game, &GameEvent::ScoreUpdated { scores })?;
            }
            MatchPhase::ScoreUpdated => {
                game.advance()?;
            }
            MatchPhase::NextRound => {
                if !observer.play_next_round(game)? {
                    info!(round = game.round(), "Match abandoned");
                    return Ok(None);
                }
                game.start_next_round()?;
                observer.notify(game, &GameEvent::RoundStarted { round: game.round() })?;
            }
            MatchPhase::MatchOver(champion) => {
                observer.notify(game, &GameEvent::MatchOver { champion })?;
                return Ok(Some(champion));
            }
        }
    }
}

fn take_turn<O: GameObserver + ?Sized>(
    game: &mut Match,
    source: &mut dyn MoveSource,
    observer: &mut O,
    seat: Seat,
) -> Result<(), MatchError> {
    debug!(%seat, "Waiting for move");
    let (position, decision) = source.next_move(game, seat)?;

    match game.play(position) {
        Ok(_) => observer.notify(
            game,
            &GameEvent::MoveMade {
                seat,
                position,
                decision,
            },
        )?,
        Err(MatchError::Board(err)) if decision.is_none() => {
            warn!(%seat, %err, "Move rejected");
            observer.notify(
                game,
                &GameEvent::MoveRejected {
                    seat,
                    reason: err.to_string(),
                },
            )?;
        }
        Err(err) => return Err(err),
    }
    Ok(())
}
