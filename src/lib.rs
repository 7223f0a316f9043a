//! # parlor-games
//!
//! Decision engines for three classic turn-based console games:
//! Rock-Paper-Scissors-Lizard-Spock, tic-tac-toe, and Twenty-One.
//!
//! ## Design Principles
//!
//! 1. **Rules as data**: beats relations, verb tables, and winning lines
//!    are static tables evaluated deterministically against current state.
//!
//! 2. **Injectable randomness**: every strategy, tactic, and shuffle takes
//!    a seeded [`core::GameRng`], so behavior replays exactly under test.
//!
//! 3. **Pure decisions**: engines never perform I/O and never share mutable
//!    state; the orchestrating front end calls in once per decision point
//!    and applies the result itself.
//!
//! ## Modules
//!
//! - `core`: round outcomes and the deterministic RNG
//! - `rps`: RPSLS move rules, histories, and five opponent strategies
//! - `tictactoe`: board rules, at-risk analysis, and the tactic policy
//! - `twentyone`: cards, ace-flexible hand valuation, and round flow

pub mod core;
pub mod rps;
pub mod tictactoe;
pub mod twentyone;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, RoundOutcome};

pub use crate::rps::{Move, MoveHistory, Profile, RpsMatch, Strategy};

pub use crate::tictactoe::{Board, Marker, Square, SquareIx, TttMatch};

pub use crate::twentyone::{Card, Deck, Face, Hand, Suit, TwentyOneRound};
