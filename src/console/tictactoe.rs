//! Console tic-tac-toe.

use super::{Console, ConsoleError};
use crate::config::GameConfig;
use anyhow::Result;
use parlor_tictactoe::{
    Decision, FrontendError, GameEvent, GameObserver, HeuristicMover, Marker, Match, MatchError,
    MoveSource, Outcome, Player, Position, Seat, play_match,
};
use rand::Rng;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

impl From<ConsoleError> for FrontendError {
    #[track_caller]
    fn from(err: ConsoleError) -> Self {
        FrontendError::new(err.message)
    }
}

/// Joins cell numbers for a prompt: `1, 2, or 3`.
pub fn joinor(cells: &[Position], delimiter: &str, word: &str) -> String {
    let numbers: Vec<String> = cells.iter().map(|pos| pos.number().to_string()).collect();
    match numbers.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{} {} {}", a, word, b),
        [rest @ .., last] => format!("{}{}{} {}", rest.join(delimiter), delimiter, word, last),
    }
}

/// Human [`MoveSource`] reading cells from a shared [`Console`].
pub struct ConsoleMoves<'a, R, W> {
    console: &'a RefCell<Console<R, W>>,
}

impl<'a, R: BufRead, W: Write> ConsoleMoves<'a, R, W> {
    /// Reads from `console`.
    pub fn new(console: &'a RefCell<Console<R, W>>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleMoves<'_, R, W> {
    fn next_move(
        &mut self,
        game: &Match,
        _seat: Seat,
    ) -> Result<(Position, Option<Decision>), MatchError> {
        let open = game.board().unmarked_cells();
        let question = format!("Choose a square ({}):", joinor(&open, ", ", "or"));
        let position = self
            .console
            .borrow_mut()
            .ask(&question, |answer| {
                answer
                    .parse::<usize>()
                    .ok()
                    .and_then(|cell| Position::from_number(cell).ok())
                    .filter(|pos| open.contains(pos))
                    .ok_or_else(|| "Sorry, that's not a valid choice.".to_string())
            })
            .map_err(FrontendError::from)?;
        Ok((position, None))
    }
}

/// [`GameObserver`] printing to a shared [`Console`].
pub struct ConsoleObserver<'a, R, W> {
    console: &'a RefCell<Console<R, W>>,
}

impl<'a, R: BufRead, W: Write> ConsoleObserver<'a, R, W> {
    /// Prints to `console`.
    pub fn new(console: &'a RefCell<Console<R, W>>) -> Self {
        Self { console }
    }
}

fn show_board<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &Match,
) -> Result<(), ConsoleError> {
    let [first, second] = game.players();
    console.show(format!(
        "\n{} is {}. {} is {}.\n\n{}\n",
        first.name(),
        first.marker(),
        second.name(),
        second.marker(),
        game.board().render()
    ))
}

impl<R: BufRead, W: Write> GameObserver for ConsoleObserver<'_, R, W> {
    fn notify(&mut self, game: &Match, event: &GameEvent) -> Result<(), FrontendError> {
        let mut console = self.console.borrow_mut();
        match event {
            GameEvent::RoundStarted { round } => {
                console.say(format!("Round {}", round))?;
                show_board(&mut console, game)?;
            }
            GameEvent::MoveMade { seat, position, .. } => {
                let player = game.player(*seat);
                if player.is_computer() {
                    console.say(format!(
                        "{} chose square {} ({}).",
                        player.name(),
                        position,
                        position.label()
                    ))?;
                }
                show_board(&mut console, game)?;
            }
            GameEvent::MoveRejected { reason, .. } => {
                console.say(format!("Sorry, {}.", reason))?;
            }
            GameEvent::RoundOver(Outcome::Winner(seat)) => {
                let name = game.player(*seat).name();
                console.say(format!("{} won the round!", name))?;
            }
            GameEvent::RoundOver(Outcome::Tie) => {
                console.say("It's a tie!")?;
            }
            GameEvent::ScoreUpdated { scores } => {
                let [first, second] = game.players();
                console.say(format!(
                    "Score: {} {} - {} {} (first to {})",
                    first.name(),
                    scores[0],
                    second.name(),
                    scores[1],
                    game.settings().points_to_win
                ))?;
            }
            GameEvent::MatchOver { champion } => {
                let name = game.player(*champion).name();
                console.say(format!("{} wins the match!", name))?;
            }
        }
        Ok(())
    }

    fn play_next_round(&mut self, _game: &Match) -> Result<bool, FrontendError> {
        Ok(self.console.borrow_mut().ask_yes_no("Play the next round? (y/n)")?)
    }
}

/// Runs tic-tac-toe matches until the player declines another.
///
/// Declining the next round abandons the match and ends the session.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write, G: Rng>(
    mut console: Console<R, W>,
    config: &GameConfig,
    rng: G,
) -> Result<()> {
    let settings = config.tictactoe();
    console.say("Welcome to Tic Tac Toe!")?;

    let name = console.ask_name("What's your name?")?;
    let computer_marker = *settings.computer_marker();
    let marker_question = format!(
        "Choose a marker (any single character except {}):",
        computer_marker
    );
    let marker = console.ask(&marker_question, |answer| {
        let marker: Marker = answer.parse().map_err(|e| format!("Sorry, {}.", e))?;
        if marker == computer_marker {
            Err(format!("Sorry, {} is taken.", computer_marker))
        } else {
            Ok(marker)
        }
    })?;

    let console = RefCell::new(console);
    let mut computer = HeuristicMover::new(rng);
    loop {
        let mut game = Match::new(
            config.match_settings(),
            Player::human(name.clone(), marker),
            Player::computer(settings.computer_name().clone(), computer_marker),
        )?;

        let mut human = ConsoleMoves::new(&console);
        let mut observer = ConsoleObserver::new(&console);
        let champion = play_match(&mut game, [&mut human, &mut computer], &mut observer)?;
        info!(?champion, rounds = game.round(), "Match finished");

        if champion.is_none()
            || !console
                .borrow_mut()
                .ask_yes_no("Would you like to play again? (y/n)")?
        {
            break;
        }
    }

    console.borrow_mut().say("Thanks for playing Tic Tac Toe. Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joinor() {
        let cells = |numbers: &[usize]| -> Vec<Position> {
            numbers
                .iter()
                .map(|&n| Position::from_number(n).unwrap())
                .collect()
        };
        assert_eq!(joinor(&cells(&[]), ", ", "or"), "");
        assert_eq!(joinor(&cells(&[4]), ", ", "or"), "4");
        assert_eq!(joinor(&cells(&[1, 2]), ", ", "or"), "1 or 2");
        assert_eq!(joinor(&cells(&[1, 2, 3]), ", ", "or"), "1, 2, or 3");
        assert_eq!(joinor(&cells(&[1, 2, 3]), "; ", "and"), "1; 2; and 3");
    }
}
