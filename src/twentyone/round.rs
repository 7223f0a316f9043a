//! Round flow for Twenty-One: deal, player turn, dealer turn, resolution.
//!
//! A pure state machine over a seeded deck. The caller supplies validated
//! hit/stay decisions; the dealer plays by fixed policy. A player bust ends
//! the round immediately, before the dealer draws at all, so the player
//! loses even hands where the dealer would also have busted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, RoundOutcome};

use super::cards::{Card, Deck};
use super::hand::Hand;

/// The dealer hits on anything below this total.
pub const DEALER_TARGET: u32 = 17;

/// Fixed dealer policy: hit while under [`DEALER_TARGET`].
#[must_use]
pub fn dealer_should_hit(hand: &Hand) -> bool {
    hand.total() < DEALER_TARGET
}

/// Resolve a finished round from the player's point of view.
///
/// A busted player loses outright; otherwise a busted dealer loses;
/// otherwise higher total wins and equal totals push.
#[must_use]
pub fn round_outcome(player: &Hand, dealer: &Hand) -> RoundOutcome {
    if player.is_busted() {
        RoundOutcome::Lost
    } else if dealer.is_busted() {
        RoundOutcome::Won
    } else if player.outranks(dealer) {
        RoundOutcome::Won
    } else if dealer.outranks(player) {
        RoundOutcome::Lost
    } else {
        RoundOutcome::Tied
    }
}

/// Where the round currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The player is deciding hit or stay.
    PlayerTurn,
    /// The player stayed; the dealer plays out their policy.
    DealerTurn,
    /// The round is resolved.
    Complete,
}

/// One round of Twenty-One: a fresh deck, two hands, and turn phases.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TwentyOneRound {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
}

impl TwentyOneRound {
    /// Shuffle a fresh deck and deal two cards each, alternating
    /// player-dealer as a table deal would.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let mut deck = Deck::shuffled(rng);
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        for _ in 0..2 {
            player.push(deck.draw().expect("fresh deck has 52 cards"));
            dealer.push(deck.draw().expect("fresh deck has 52 cards"));
        }

        Self {
            deck,
            player,
            dealer,
            phase: Phase::PlayerTurn,
        }
    }

    /// The player's hand.
    #[must_use]
    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// The dealer's hand.
    #[must_use]
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// The dealer's face-up card, shown while the player decides.
    #[must_use]
    pub fn dealer_upcard(&self) -> Card {
        self.dealer.upcard().expect("dealer was dealt two cards")
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player takes a card. Returns it for display.
    ///
    /// A bust completes the round on the spot; the dealer never draws.
    pub fn player_hit(&mut self) -> Card {
        assert!(
            self.phase == Phase::PlayerTurn,
            "hit outside the player's turn"
        );

        let card = self.deck.draw().expect("deck cannot empty in one round");
        self.player.push(card);

        if self.player.is_busted() {
            debug!(total = self.player.total(), "player busted");
            self.phase = Phase::Complete;
        }

        card
    }

    /// Player stays; play passes to the dealer.
    pub fn player_stay(&mut self) {
        assert!(
            self.phase == Phase::PlayerTurn,
            "stay outside the player's turn"
        );
        self.phase = Phase::DealerTurn;
    }

    /// Dealer draws to policy and the round completes.
    ///
    /// Returns the cards the dealer drew, in order.
    pub fn play_dealer(&mut self) -> Vec<Card> {
        assert!(
            self.phase == Phase::DealerTurn,
            "dealer plays only after the player stays"
        );

        let mut drawn = Vec::new();
        while dealer_should_hit(&self.dealer) {
            let card = self.deck.draw().expect("deck cannot empty in one round");
            self.dealer.push(card);
            drawn.push(card);
        }

        self.phase = Phase::Complete;
        drawn
    }

    /// The round's result from the player's point of view.
    ///
    /// Only valid once the round is complete.
    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        assert!(self.phase == Phase::Complete, "round is not resolved yet");
        round_outcome(&self.player, &self.dealer)
    }
}
