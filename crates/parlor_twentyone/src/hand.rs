//! Hands and hand totals.

use super::card::Card;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Totals above this bust the hand.
pub const BUST_THRESHOLD: u32 = 21;

/// Scores a sequence of cards.
///
/// Ranks 2-10 count face value, faces count 10 and each ace starts at 1.
/// Then, once per ace, 10 is added if the running total is still 11 or
/// less. The check is repeated against the updated total for every ace.
pub fn hand_total<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u32 {
    let mut total = 0;
    let mut aces = 0;
    for card in cards {
        total += card.rank().points();
        if card.is_ace() {
            aces += 1;
        }
    }

    for _ in 0..aces {
        if total <= 11 {
            total += 10;
        }
    }
    total
}

/// Cards held by a participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        trace!(%card, total = self.total(), "Card added");
    }

    /// Cards in the order received.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Total of every card, face down or not.
    pub fn total(&self) -> u32 {
        hand_total(&self.cards)
    }

    /// Total of the face-up cards only.
    pub fn visible_total(&self) -> u32 {
        hand_total(self.cards.iter().filter(|card| !card.hidden()))
    }

    /// Checks whether the hand is over 21.
    pub fn is_busted(&self) -> bool {
        self.total() > BUST_THRESHOLD
    }

    /// Turns the first card face down.
    pub fn hide_first(&mut self) {
        if let Some(card) = self.cards.first_mut() {
            card.set_hidden(true);
        }
    }

    /// Turns every card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.set_hidden(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Hearts, rank)).collect()
    }

    #[test]
    fn test_ace_king_is_twenty_one() {
        assert_eq!(hand_total(&cards(&[Rank::Ace, Rank::King])), 21);
    }

    #[test]
    fn test_two_aces_and_nine() {
        // 1 + 1 + 9 = 11; first ace bumps to 21, second stays at 1.
        assert_eq!(hand_total(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    }

    #[test]
    fn test_two_aces() {
        assert_eq!(hand_total(&cards(&[Rank::Ace, Rank::Ace])), 12);
    }

    #[test]
    fn test_ace_not_bumped_over_eleven() {
        assert_eq!(
            hand_total(&cards(&[Rank::Ace, Rank::Five, Rank::Seven])),
            13
        );
    }

    #[test]
    fn test_numeric_and_faces() {
        assert_eq!(
            hand_total(&cards(&[Rank::Two, Rank::Ten, Rank::Queen])),
            22
        );
        assert_eq!(hand_total(&cards(&[])), 0);
    }

    #[test]
    fn test_bust() {
        let mut hand = Hand::new();
        for card in cards(&[Rank::King, Rank::Queen, Rank::Two]) {
            hand.add(card);
        }
        assert!(hand.is_busted());
    }

    #[test]
    fn test_visible_total_skips_hidden() {
        let mut hand = Hand::new();
        for card in cards(&[Rank::King, Rank::Ace]) {
            hand.add(card);
        }
        hand.hide_first();
        assert_eq!(hand.visible_total(), 11);
        assert_eq!(hand.total(), 21);
        hand.reveal();
        assert_eq!(hand.visible_total(), 21);
    }
}
