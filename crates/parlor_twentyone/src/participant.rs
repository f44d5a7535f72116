//! Player and dealer.

use super::hand::Hand;
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Names the dealer is drawn from.
pub const DEALER_NAMES: [&str; 3] = ["Ace McQueen", "Jack Bauer", "Seven Costanza"];

/// Picks a dealer name.
pub fn random_dealer_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    DEALER_NAMES.choose(rng).copied().unwrap_or(DEALER_NAMES[0])
}

/// Side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Role {
    /// The player.
    #[display("player")]
    Player,
    /// The house.
    #[display("dealer")]
    Dealer,
}

/// Someone holding a hand.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Participant {
    /// Display name.
    name: String,
    /// Player or dealer.
    role: Role,
    /// Cards held.
    hand: Hand,
}

impl Participant {
    /// Creates a participant with an empty hand.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            hand: Hand::new(),
        }
    }

    /// Hand total.
    pub fn total(&self) -> u32 {
        self.hand.total()
    }

    /// Checks whether the hand is over 21.
    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_dealer_name_from_list() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            assert!(DEALER_NAMES.contains(&random_dealer_name(&mut rng)));
        }
    }

    #[test]
    fn test_new_participant_has_empty_hand() {
        let player = Participant::new("Ada", Role::Player);
        assert_eq!(player.total(), 0);
        assert!(player.hand().cards().is_empty());
        assert_eq!(player.to_string(), "Ada (player)");
    }
}
