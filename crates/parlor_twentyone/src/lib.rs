//! Pure twenty-one game logic.
//!
//! A [`Round`] deals from a shuffled [`Deck`], lets the player hit or
//! stay, then draws for the dealer until the stand total. Hand totals
//! come from [`hand_total`], which bumps aces one at a time.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod card;
mod deck;
mod hand;
mod participant;
mod round;

pub use card::{Card, Rank, Suit};
pub use deck::{DECK_SIZE, Deck, DeckError};
pub use hand::{BUST_THRESHOLD, Hand, hand_total};
pub use participant::{DEALER_NAMES, Participant, Role, random_dealer_name};
pub use round::{
    DEFAULT_DEALER_STANDS_ON, DealerAction, Round, RoundError, RoundPhase, RoundResult,
    TableSettings,
};
