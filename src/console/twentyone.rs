//! Console twenty-one.

use super::{Console, ConsoleError};
use crate::config::GameConfig;
use anyhow::Result;
use parlor_twentyone::{
    Card, DealerAction, Participant, Round, RoundPhase, RoundResult, random_dealer_name,
};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Draws cards side by side as boxes. Face-down cards show `?`.
pub fn render_cards(cards: &[Card]) -> String {
    let faces: Vec<(char, char)> = cards
        .iter()
        .map(|card| {
            if card.hidden() {
                ('?', '?')
            } else {
                (card.suit().symbol(), card.rank().label())
            }
        })
        .collect();

    let row = |cell: &dyn Fn(char, char) -> String| -> String {
        let mut line: String = faces.iter().map(|&(suit, rank)| cell(suit, rank)).collect();
        line.push('\n');
        line
    };

    [
        row(&|_, _| "  ______ ".to_string()),
        row(&|suit, _| format!(" |{}     |", suit)),
        row(&|_, _| " |      |".to_string()),
        row(&|_, rank| format!(" |  {}   |", rank)),
        row(&|_, _| " |      |".to_string()),
        row(&|suit, _| format!(" |_____{}|", suit)),
    ]
    .concat()
}

fn show_hand<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    participant: &Participant,
) -> Result<(), ConsoleError> {
    let hand = participant.hand();
    console.say(format!(
        "{} is showing (total {}):",
        participant.name(),
        hand.visible_total()
    ))?;
    console.show(render_cards(hand.cards()))
}

fn show_table<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    round: &Round,
) -> Result<(), ConsoleError> {
    show_hand(console, round.dealer())?;
    show_hand(console, round.player())
}

fn result_message(round: &Round, result: RoundResult) -> String {
    let player = round.player().name();
    let dealer = round.dealer().name();
    match result {
        RoundResult::PlayerBusted => format!("{} busted! {} wins.", player, dealer),
        RoundResult::DealerBusted => format!("{} busted! {} wins.", dealer, player),
        RoundResult::PlayerWins => format!("{} wins!", player),
        RoundResult::DealerWins => format!("{} wins!", dealer),
        RoundResult::Tie => "It's a tie!".to_string(),
    }
}

/// Plays one round: player turn, dealer turn, result.
#[instrument(skip_all)]
fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut round: Round,
) -> Result<RoundResult> {
    show_table(console, &round)?;

    while round.phase() == RoundPhase::PlayerTurn {
        let hit = console.ask("Hit or stay? (h/s)", |answer| {
            match answer.to_lowercase().as_str() {
                "h" | "hit" => Ok(true),
                "s" | "stay" => Ok(false),
                _ => Err("Sorry, must enter 'h' or 's'.".to_string()),
            }
        })?;

        if hit {
            let card = round.hit()?;
            console.say(format!(
                "{} hits and draws {}.",
                round.player().name(),
                card
            ))?;
            show_hand(console, round.player())?;
        } else {
            round.stay()?;
            console.say(format!(
                "{} stays at {}.",
                round.player().name(),
                round.player().total()
            ))?;
        }
    }

    while round.phase() == RoundPhase::DealerTurn {
        match round.dealer_step()? {
            DealerAction::Hit(card) => {
                console.say(format!(
                    "{} hits and draws {}.",
                    round.dealer().name(),
                    card
                ))?;
            }
            DealerAction::Stay => {
                console.say(format!(
                    "{} stays at {}.",
                    round.dealer().name(),
                    round.dealer().total()
                ))?;
            }
        }
    }

    let result = round
        .result()
        .ok_or_else(|| anyhow::anyhow!("Round ended without a result"))?;
    show_table(console, &round)?;
    console.say(format!(
        "{} has {}, {} has {}.",
        round.player().name(),
        round.player().total(),
        round.dealer().name(),
        round.dealer().total()
    ))?;
    console.say(result_message(&round, result))?;
    Ok(result)
}

/// Runs twenty-one rounds until the player declines another.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write, G: Rng>(
    mut console: Console<R, W>,
    config: &GameConfig,
    mut rng: G,
) -> Result<()> {
    console.say("Welcome to Twenty-One!")?;
    let name = console.ask_name("What's your name?")?;
    let dealer = random_dealer_name(&mut rng);
    console.say(format!("Your dealer today is {}.", dealer))?;

    let mut played = 0;
    let mut won = 0;
    loop {
        let round = Round::deal(config.table_settings(), name.clone(), dealer, &mut rng)?;
        let result = play_round(&mut console, round)?;
        debug!(%result, "Round complete");

        played += 1;
        if result.player_won() {
            won += 1;
        }
        console.say(format!("You've won {} of {} rounds.", won, played))?;

        if !console.ask_yes_no("Would you like to play again? (y/n)")? {
            break;
        }
    }

    console.say("Thanks for playing Twenty-One. Goodbye!")?;
    Ok(())
}
