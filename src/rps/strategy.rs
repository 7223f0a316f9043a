//! Computer move-selection strategies.
//!
//! Five opponent profiles, from trivial (always Rock) to adaptive
//! (weight moves by past results). The adaptive profiles never mutate a
//! shared table: each call recomputes a fresh [`MoveWeights`] from the
//! immutable baseline and the relevant history, then samples from it.
//!
//! All sampling goes through the injected [`GameRng`], so a seeded RNG
//! replays every choice exactly.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{GameRng, RoundOutcome};

use super::history::MoveHistory;
use super::moves::Move;

/// Starting weight for every move in the adaptive profiles.
///
/// Ten is high enough that a short history never empties the pool, yet a
/// long losing streak on one move can still drive it to zero and exclude it.
pub const BASELINE_WEIGHT: u32 = 10;

/// A move-selection strategy for a computer opponent.
///
/// `own` is the computer's history, `opponent` the human's; profiles read
/// one, both, or neither.
pub trait Strategy {
    /// Choose the next move.
    fn choose(&self, own: &MoveHistory, opponent: &MoveHistory, rng: &mut GameRng) -> Move;
}

// =============================================================================
// Move Weights
// =============================================================================

/// Sampling weights over the five moves.
///
/// A weight of zero excludes that move from the draw. If every weight is
/// zero, sampling falls back to the uniform distribution; an empty pool is
/// a defined fallback, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveWeights {
    weights: [u32; 5],
}

impl MoveWeights {
    /// Equal weight for every move.
    #[must_use]
    pub const fn uniform(weight: u32) -> Self {
        Self {
            weights: [weight; 5],
        }
    }

    /// The adaptive-profile starting point: every move at [`BASELINE_WEIGHT`].
    #[must_use]
    pub const fn baseline() -> Self {
        Self::uniform(BASELINE_WEIGHT)
    }

    /// All weights zero; build up from nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self::uniform(0)
    }

    /// Weight currently assigned to a move.
    #[must_use]
    pub fn get(&self, mv: Move) -> u32 {
        self.weights[mv.index()]
    }

    /// Set a move's weight outright.
    pub fn set(&mut self, mv: Move, weight: u32) {
        self.weights[mv.index()] = weight;
    }

    /// Increase a move's weight by one.
    pub fn bump(&mut self, mv: Move) {
        self.weights[mv.index()] += 1;
    }

    /// Clamp signed per-move tallies into a weight pool.
    ///
    /// Tallies at or below zero become weight zero, which excludes the
    /// move from the draw.
    #[must_use]
    pub fn from_net(net: [i32; 5]) -> Self {
        let mut weights = Self::empty();
        for mv in Move::ALL {
            weights.set(mv, net[mv.index()].max(0) as u32);
        }
        weights
    }

    /// Draw a move with probability proportional to the weights.
    ///
    /// Falls back to a uniform draw if the pool is empty.
    pub fn sample(&self, rng: &mut GameRng) -> Move {
        match rng.choose_weighted(&self.weights) {
            Some(i) => Move::ALL[i],
            None => {
                trace!("weight pool empty, falling back to uniform draw");
                *rng.choose(&Move::ALL).expect("Move::ALL is never empty")
            }
        }
    }
}

impl Default for MoveWeights {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Weights favoring this player's historically winning moves.
///
/// Starts from the baseline; each won round adds one to that move's tally,
/// each tied or lost round removes one. The tally runs over the whole
/// history before clamping, so twelve ties and a win on the same move net
/// out to baseline minus eleven, not baseline minus nine. Self-reinforcing:
/// a move that keeps winning keeps getting picked.
#[must_use]
pub fn win_seeking_weights(own: &MoveHistory) -> MoveWeights {
    let mut net = [BASELINE_WEIGHT as i32; 5];

    for record in own.iter() {
        match record.outcome {
            RoundOutcome::Won => net[record.mv.index()] += 1,
            RoundOutcome::Lost | RoundOutcome::Tied => net[record.mv.index()] -= 1,
        }
    }

    MoveWeights::from_net(net)
}

/// Weights favoring counters to the opponent's successful moves.
///
/// Starts from the baseline; for every opponent round that was a win or a
/// tie for them, add one to each of the two moves that defeat the move they
/// played. Models "expect their good plays to come back, and be ready."
#[must_use]
pub fn counter_seeking_weights(opponent: &MoveHistory) -> MoveWeights {
    let mut weights = MoveWeights::baseline();

    for record in opponent.iter() {
        if matches!(record.outcome, RoundOutcome::Won | RoundOutcome::Tied) {
            for counter in record.mv.defeaters() {
                weights.bump(counter);
            }
        }
    }

    weights
}

// =============================================================================
// Profiles
// =============================================================================

/// Plays Rock, every single time.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysRock;

impl Strategy for AlwaysRock {
    fn choose(&self, _own: &MoveHistory, _opponent: &MoveHistory, _rng: &mut GameRng) -> Move {
        Move::Rock
    }
}

/// Leans hard on Scissors, rarely Rock, never anything else.
///
/// Rock has weight 1 and Scissors weight 3, so three draws in four are
/// Scissors.
#[derive(Clone, Copy, Debug, Default)]
pub struct Biased;

impl Strategy for Biased {
    fn choose(&self, _own: &MoveHistory, _opponent: &MoveHistory, rng: &mut GameRng) -> Move {
        let mut weights = MoveWeights::empty();
        weights.set(Move::Rock, 1);
        weights.set(Move::Scissors, 3);
        weights.sample(rng)
    }
}

/// Every move equally likely.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl Strategy for UniformRandom {
    fn choose(&self, _own: &MoveHistory, _opponent: &MoveHistory, rng: &mut GameRng) -> Move {
        MoveWeights::uniform(1).sample(rng)
    }
}

/// Favors its own past winners; disfavors past losers and ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinSeeking;

impl Strategy for WinSeeking {
    fn choose(&self, own: &MoveHistory, _opponent: &MoveHistory, rng: &mut GameRng) -> Move {
        win_seeking_weights(own).sample(rng)
    }
}

/// Favors the defeaters of the opponent's won and tied moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterSeeking;

impl Strategy for CounterSeeking {
    fn choose(&self, _own: &MoveHistory, opponent: &MoveHistory, rng: &mut GameRng) -> Move {
        counter_seeking_weights(opponent).sample(rng)
    }
}

/// Named opponent profile, for selecting a strategy by tag.
///
/// Dispatches to the corresponding unit strategy; useful when the opponent
/// is chosen at match start (possibly at random) and stored by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    AlwaysRock,
    Biased,
    UniformRandom,
    WinSeeking,
    CounterSeeking,
}

impl Profile {
    /// All profiles, for drawing a random opponent.
    pub const ALL: [Profile; 5] = [
        Profile::AlwaysRock,
        Profile::Biased,
        Profile::UniformRandom,
        Profile::WinSeeking,
        Profile::CounterSeeking,
    ];
}

impl Strategy for Profile {
    fn choose(&self, own: &MoveHistory, opponent: &MoveHistory, rng: &mut GameRng) -> Move {
        match self {
            Profile::AlwaysRock => AlwaysRock.choose(own, opponent, rng),
            Profile::Biased => Biased.choose(own, opponent, rng),
            Profile::UniformRandom => UniformRandom.choose(own, opponent, rng),
            Profile::WinSeeking => WinSeeking.choose(own, opponent, rng),
            Profile::CounterSeeking => CounterSeeking.choose(own, opponent, rng),
        }
    }
}
