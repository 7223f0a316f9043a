//! Tic-tac-toe: board rules, at-risk analysis, and the tactic policy.
//!
//! ## Key Types
//!
//! - `Board` / `Square` / `Marker` / `SquareIx`: the 3×3 grid
//! - `WINNING_LINES`: the eight fixed lines, in scan order
//! - `tactics::choose_square`: win > block > center > random heuristic
//! - `TttMatch`: pure round/score state machine for a full match

pub mod board;
pub mod game;
pub mod tactics;

pub use board::{Board, Line, Marker, Square, SquareIx, WINNING_LINES};
pub use game::{RoundEnd, TttMatch, DEFAULT_WINNING_SCORE};
pub use tactics::choose_square;
