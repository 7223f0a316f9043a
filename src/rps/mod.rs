//! Rock-Paper-Scissors-Lizard-Spock: move rules, histories, and opponents.
//!
//! ## Key Types
//!
//! - `Move`: the five-move enum with the beats pentagon and action verbs
//! - `MoveHistory`: append-only per-player record for adaptive strategies
//! - `Strategy` / `Profile`: computer opponents, trivial through adaptive
//! - `RpsMatch`: pure score/history state machine for a full match

pub mod game;
pub mod history;
pub mod moves;
pub mod strategy;

pub use game::{MatchWinner, RoundReport, RpsMatch, DEFAULT_WINNING_SCORE};
pub use history::{MoveHistory, MoveRecord};
pub use moves::Move;
pub use strategy::{
    counter_seeking_weights, win_seeking_weights, AlwaysRock, Biased, CounterSeeking, MoveWeights,
    Profile, Strategy, UniformRandom, WinSeeking, BASELINE_WEIGHT,
};
