//! Hand valuation with flexible aces.
//!
//! The total is recomputed on every call rather than cached, so a hand can
//! never report a stale value after a draw. Each ace counts 11 when the
//! running total allows it and 1 otherwise; the greedy per-ace choice is
//! equivalent to counting every ace high and then demoting while busted,
//! so the result does not depend on card order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cards::Card;

/// Bust threshold: a hand totaling more than this loses outright.
pub const TARGET: u32 = 21;

/// One participant's cards, in deal order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawn card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Discard everything for the next round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards have been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The face-up card a dealer shows before their turn.
    #[must_use]
    pub fn upcard(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Best total for this hand.
    ///
    /// Non-ace values are summed first; then each ace adds 11 if that keeps
    /// the running total at or under [`TARGET`], otherwise 1. Pure and
    /// idempotent. Valuing an empty hand is a programming error.
    #[must_use]
    pub fn total(&self) -> u32 {
        assert!(!self.is_empty(), "cannot total an empty hand");

        let mut total: u32 = self
            .cards
            .iter()
            .filter(|card| !card.face.is_ace())
            .map(|card| card.face.value())
            .sum();

        let aces = self.cards.iter().filter(|card| card.face.is_ace()).count();
        for _ in 0..aces {
            total += if total + 11 > TARGET { 1 } else { 11 };
        }

        total
    }

    /// Has this hand gone over the target?
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > TARGET
    }

    /// Strictly higher total than `other`.
    ///
    /// Compares totals only, never card composition. Bust short-circuiting
    /// belongs to round resolution, not to the value comparison.
    #[must_use]
    pub fn outranks(&self, other: &Hand) -> bool {
        self.total() > other.total()
    }

    /// Equal totals.
    #[must_use]
    pub fn ties(&self, other: &Hand) -> bool {
        self.total() == other.total()
    }
}
