//! Core types shared by every game: round outcomes and the injectable RNG.
//!
//! The games themselves are independent; the only thing they share is a
//! deterministic randomness source and the vocabulary for round results.

pub mod outcome;
pub mod rng;

pub use outcome::RoundOutcome;
pub use rng::{GameRng, GameRngState};
