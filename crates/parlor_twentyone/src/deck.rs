//! A shuffled 52-card deck.

use super::card::{Card, Rank, Suit};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Error raised when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DeckError {
    /// Every card has been dealt.
    #[display("Deck is empty")]
    Empty,
}

impl std::error::Error for DeckError {}

/// A deck of cards. Dealing takes from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    // Top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds all 52 cards and shuffles them with `rng`.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Suit::iter()
            .flat_map(|suit| Rank::iter().map(move |rank| Card::new(suit, rank)))
            .collect();
        cards.shuffle(rng);
        debug!(cards = cards.len(), "Deck shuffled");
        Self { cards }
    }

    /// A deck that deals `cards` in the given order.
    pub fn stacked(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Deals the top card.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Cards left to deal.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
