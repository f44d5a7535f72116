//! Scripted console sessions for both games.

use parlor_games::console::{tictactoe, twentyone};
use parlor_games::{Console, GameConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn session<'a>(input: &'a str, output: &'a mut Vec<u8>) -> Console<&'a [u8], &'a mut Vec<u8>> {
    Console::new(input.as_bytes(), output)
}

fn transcript(output: &[u8]) -> String {
    String::from_utf8_lossy(output).into_owned()
}

fn single_point() -> GameConfig {
    let mut config = GameConfig::default();
    config.set_points_to_win(1);
    config
}

#[test]
fn test_tictactoe_computer_takes_single_point_match() {
    // Computer answers 1 with the center, blocks 1-2 at 3, then wins on 3-5-7.
    // The second "3" is rejected because the cell is taken.
    let mut output = Vec::new();
    let console = session("Ada\nX\n1\n2\n3\n4\nn\n", &mut output);
    tictactoe::run(console, &single_point(), StdRng::seed_from_u64(1)).unwrap();

    let out = transcript(&output);
    assert!(out.contains("=> Welcome to Tic Tac Toe!"));
    assert!(out.contains("Computer chose square 5 (Center)."));
    assert!(out.contains("Computer chose square 3 (Top-right)."));
    assert!(out.contains("Computer chose square 7 (Bottom-left)."));
    assert!(out.contains("Sorry, that's not a valid choice."));
    assert!(out.contains("Computer won the round!"));
    assert!(out.contains("Computer wins the match!"));
    assert!(!out.contains("Play the next round?"));
    assert!(out.contains("Would you like to play again? (y/n)"));
    assert!(out.ends_with("=> Thanks for playing Tic Tac Toe. Goodbye!\n"));
}

#[test]
fn test_tictactoe_declining_next_round_ends_session() {
    let mut config = GameConfig::default();
    config.set_points_to_win(2);

    let mut output = Vec::new();
    let console = session("Ada\nX\n1\n2\n4\nn\n", &mut output);
    tictactoe::run(console, &config, StdRng::seed_from_u64(1)).unwrap();

    let out = transcript(&output);
    assert!(out.contains("Score: Ada 0 - Computer 1 (first to 2)"));
    assert_eq!(out.matches("Play the next round? (y/n)").count(), 1);
    assert!(!out.contains("Would you like to play again?"));
    assert!(out.ends_with("=> Thanks for playing Tic Tac Toe. Goodbye!\n"));
}

#[test]
fn test_tictactoe_rejects_computer_marker() {
    let mut output = Vec::new();
    let console = session("Ada\nO\nXX\nX\n1\n2\n4\nn\n", &mut output);
    tictactoe::run(console, &single_point(), StdRng::seed_from_u64(1)).unwrap();

    let out = transcript(&output);
    assert!(out.contains("Sorry, O is taken."));
    assert!(out.contains("Sorry, Marker must be a single character"));
    assert!(out.contains("Ada is X. Computer is O."));
}

#[test]
fn test_tictactoe_input_closed_mid_match() {
    let mut output = Vec::new();
    let console = session("Ada\nX\n1\n", &mut output);
    let err =
        tictactoe::run(console, &GameConfig::default(), StdRng::seed_from_u64(1)).unwrap_err();
    assert!(err.to_string().contains("Input closed"));
}

#[test]
fn test_twentyone_reprompts_and_finishes() {
    let mut output = Vec::new();
    let console = session("Ada\nx\ns\nn\n", &mut output);
    twentyone::run(console, &GameConfig::default(), StdRng::seed_from_u64(42)).unwrap();

    let out = transcript(&output);
    assert!(out.contains("=> Welcome to Twenty-One!"));
    assert!(out.contains("Your dealer today is"));
    assert!(out.contains("Sorry, must enter 'h' or 's'."));
    assert!(out.contains("Ada stays at"));
    assert!(out.contains("of 1 rounds."));
    assert!(out.ends_with("=> Thanks for playing Twenty-One. Goodbye!\n"));
}

#[test]
fn test_twentyone_empty_input_is_an_error() {
    let mut output = Vec::new();
    let console = session("", &mut output);
    assert!(twentyone::run(console, &GameConfig::default(), StdRng::seed_from_u64(42)).is_err());
}
