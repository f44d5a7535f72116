//! Command-line interface for parlor_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parlor Games - tic-tac-toe and twenty-one in the terminal
#[derive(Parser, Debug)]
#[command(name = "parlor_games")]
#[command(about = "Console tic-tac-toe and twenty-one", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, global = true, default_value = "parlor_games.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe against the computer
    #[command(name = "tictactoe")]
    TicTacToe {
        /// Round wins needed to take the match
        #[arg(long)]
        points_to_win: Option<u32>,

        /// Let the computer open every round
        #[arg(long)]
        computer_first: bool,

        /// Seed for the computer's random moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play twenty-one against the dealer
    #[command(name = "twentyone")]
    TwentyOne {
        /// Dealer keeps hitting below this total
        #[arg(long)]
        dealer_stands_on: Option<u32>,

        /// Seed for shuffling
        #[arg(long)]
        seed: Option<u64>,
    },
}
