//! Parlor Games - console tic-tac-toe and twenty-one.
//!
//! # Architecture
//!
//! - **parlor_tictactoe**: board, win detection, computer heuristic, match scoring
//! - **parlor_twentyone**: deck, hand totals, player/dealer turns
//! - **config**: TOML settings with defaults
//! - **console**: prompt loops and rendering over any `BufRead`/`Write`
//!
//! # Example
//!
//! ```no_run
//! use parlor_games::{Console, GameConfig};
//! use rand::SeedableRng;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load_or_default("parlor_games.toml")?;
//! let stdin = std::io::stdin();
//! let console = Console::new(stdin.lock(), std::io::stdout());
//! let rng = rand::rngs::StdRng::seed_from_u64(7);
//! parlor_games::console::tictactoe::run(console, &config, rng)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod console;

pub use cli::{Cli, Command};
pub use config::{ConfigError, FirstMover, GameConfig, TicTacToeConfig, TwentyOneConfig};
pub use console::{Console, ConsoleError};

pub use parlor_tictactoe as tictactoe;
pub use parlor_twentyone as twentyone;
