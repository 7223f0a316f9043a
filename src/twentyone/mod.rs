//! Twenty-One: cards, ace-flexible hand valuation, and round flow.
//!
//! ## Key Types
//!
//! - `Card` / `Face` / `Suit` / `Deck`: the 52-card model
//! - `Hand`: derived, never-cached totals with per-ace 11/1 resolution
//! - `TwentyOneRound`: deal / hit / stay / dealer-policy state machine

pub mod cards;
pub mod hand;
pub mod round;

pub use cards::{Card, Deck, Face, Suit};
pub use hand::{Hand, TARGET};
pub use round::{dealer_should_hit, round_outcome, Phase, TwentyOneRound, DEALER_TARGET};
