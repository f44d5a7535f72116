//! Parlor Games - CLI entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use parlor_games::console::{tictactoe, twentyone};
use parlor_games::{Cli, Command, Console, FirstMover, GameConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(&cli.config)?;

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());

    match cli.command {
        Command::TicTacToe {
            points_to_win,
            computer_first,
            seed,
        } => {
            if let Some(points) = points_to_win {
                config.set_points_to_win(points);
            }
            if computer_first {
                config.set_first_mover(FirstMover::Computer);
            }
            info!(?seed, "Starting tic-tac-toe");
            tictactoe::run(console, &config, rng(seed))
        }
        Command::TwentyOne {
            dealer_stands_on,
            seed,
        } => {
            if let Some(total) = dealer_stands_on {
                config.set_dealer_stands_on(total);
            }
            info!(?seed, "Starting twenty-one");
            twentyone::run(console, &config, rng(seed))
        }
    }
}

/// Seeded RNG when asked for, entropy otherwise.
fn rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}
