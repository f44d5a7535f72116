//! A single round of twenty-one.
//!
//! ```text
//! PlayerTurn --hit--> PlayerTurn | Finished(PlayerBusted)
//! PlayerTurn --stay--> DealerTurn
//! DealerTurn --dealer_step--> DealerTurn | Finished(..)
//! ```

use super::card::Card;
use super::deck::{Deck, DeckError};
use super::participant::{Participant, Role};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// The dealer stands at this total unless configured otherwise.
pub const DEFAULT_DEALER_STANDS_ON: u32 = 17;

/// Table rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSettings {
    /// Dealer keeps hitting below this total.
    pub dealer_stands_on: u32,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEFAULT_DEALER_STANDS_ON,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RoundResult {
    /// Player went over 21.
    #[display("player busted")]
    PlayerBusted,
    /// Dealer went over 21.
    #[display("dealer busted")]
    DealerBusted,
    /// Player total beat the dealer's.
    #[display("player wins")]
    PlayerWins,
    /// Dealer total beat the player's.
    #[display("dealer wins")]
    DealerWins,
    /// Equal totals.
    #[display("tie")]
    Tie,
}

impl RoundResult {
    /// Whether the player came out ahead.
    pub fn player_won(self) -> bool {
        matches!(self, RoundResult::PlayerWins | RoundResult::DealerBusted)
    }
}

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RoundPhase {
    /// Player decides to hit or stay.
    #[display("player turn")]
    PlayerTurn,
    /// Dealer draws to the stand total.
    #[display("dealer turn")]
    DealerTurn,
    /// Round over.
    #[display("finished ({})", _0)]
    Finished(RoundResult),
}

/// What the dealer did on one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerAction {
    /// Took a card.
    Hit(Card),
    /// Stood on the current total.
    Stay,
}

/// Error that can occur during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RoundError {
    /// The action is not valid in the current phase.
    #[display("Not allowed during {}", _0)]
    WrongPhase(RoundPhase),

    /// The deck ran out.
    #[display("{}", _0)]
    Deck(DeckError),
}

impl std::error::Error for RoundError {}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        RoundError::Deck(err)
    }
}

/// One deal between a player and the dealer.
#[derive(Debug, Clone)]
pub struct Round {
    settings: TableSettings,
    deck: Deck,
    player: Participant,
    dealer: Participant,
    phase: RoundPhase,
}

impl Round {
    /// Shuffles a fresh deck and deals the opening hands.
    #[instrument(skip(rng, player_name, dealer_name))]
    pub fn deal<R: Rng + ?Sized>(
        settings: TableSettings,
        player_name: impl Into<String>,
        dealer_name: impl Into<String>,
        rng: &mut R,
    ) -> Result<Self, RoundError> {
        Self::with_deck(settings, player_name, dealer_name, Deck::new(rng))
    }

    /// Deals the opening hands from `deck`.
    ///
    /// Two cards each, alternating player then dealer. The dealer's
    /// first card stays face down until the dealer's turn.
    #[instrument(skip_all)]
    pub fn with_deck(
        settings: TableSettings,
        player_name: impl Into<String>,
        dealer_name: impl Into<String>,
        mut deck: Deck,
    ) -> Result<Self, RoundError> {
        let mut player = Participant::new(player_name, Role::Player);
        let mut dealer = Participant::new(dealer_name, Role::Dealer);
        for _ in 0..2 {
            player.hand_mut().add(deck.deal()?);
            dealer.hand_mut().add(deck.deal()?);
        }
        dealer.hand_mut().hide_first();

        info!(
            player_total = player.total(),
            dealer_showing = dealer.hand().visible_total(),
            cards_left = deck.remaining(),
            "Opening hands dealt"
        );
        Ok(Self {
            settings,
            deck,
            player,
            dealer,
            phase: RoundPhase::PlayerTurn,
        })
    }

    /// Returns the current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player.
    pub fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the table rules.
    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    /// Result once the round is finished.
    pub fn result(&self) -> Option<RoundResult> {
        match self.phase {
            RoundPhase::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Deals the player another card. Busting ends the round.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.expect_phase(RoundPhase::PlayerTurn)?;
        let card = self.deck.deal()?;
        self.player.hand_mut().add(card);
        debug!(%card, total = self.player.total(), "Player hits");

        if self.player.is_busted() {
            self.finish(RoundResult::PlayerBusted);
        }
        Ok(card)
    }

    /// Ends the player's turn and reveals the dealer's hand.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn stay(&mut self) -> Result<RoundPhase, RoundError> {
        self.expect_phase(RoundPhase::PlayerTurn)?;
        debug!(total = self.player.total(), "Player stays");
        self.dealer.hand_mut().reveal();
        self.phase = RoundPhase::DealerTurn;
        Ok(self.phase)
    }

    /// Plays one dealer decision.
    ///
    /// The dealer hits below [`TableSettings::dealer_stands_on`]; a stay or
    /// a bust finishes the round.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn dealer_step(&mut self) -> Result<DealerAction, RoundError> {
        self.expect_phase(RoundPhase::DealerTurn)?;

        if self.dealer.total() >= self.settings.dealer_stands_on {
            debug!(total = self.dealer.total(), "Dealer stays");
            let result = self.compare_totals();
            self.finish(result);
            return Ok(DealerAction::Stay);
        }

        let card = self.deck.deal()?;
        self.dealer.hand_mut().add(card);
        debug!(%card, total = self.dealer.total(), "Dealer hits");
        if self.dealer.is_busted() {
            self.finish(RoundResult::DealerBusted);
        }
        Ok(DealerAction::Hit(card))
    }

    /// Runs the dealer's whole turn.
    pub fn play_dealer(&mut self) -> Result<RoundResult, RoundError> {
        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            self.dealer_step()?;
        }
    }

    fn compare_totals(&self) -> RoundResult {
        match self.player.total().cmp(&self.dealer.total()) {
            Ordering::Greater => RoundResult::PlayerWins,
            Ordering::Less => RoundResult::DealerWins,
            Ordering::Equal => RoundResult::Tie,
        }
    }

    fn finish(&mut self, result: RoundResult) {
        self.dealer.hand_mut().reveal();
        self.phase = RoundPhase::Finished(result);
        info!(
            %result,
            player_total = self.player.total(),
            dealer_total = self.dealer.total(),
            "Round finished"
        );
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::WrongPhase(self.phase))
        }
    }
}
