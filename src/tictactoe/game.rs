//! Match orchestration state for tic-tac-toe.
//!
//! Rounds are played on one board until someone wins or the board fills;
//! round wins accumulate toward a match score. Pure state machine, no I/O:
//! the caller feeds validated squares (or asks for a computer move) and
//! reads the board back out for display.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::board::{Board, Marker, SquareIx};
use super::tactics;

/// First player to win this many rounds takes the match, unless overridden.
pub const DEFAULT_WINNING_SCORE: u32 = 3;

/// How one board round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnd {
    /// Three in a row for this marker.
    Win(Marker),
    /// Board full, no line held.
    Draw,
}

/// Score and board state for a tic-tac-toe match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TttMatch {
    board: Board,
    first: Marker,
    current: Marker,
    x_rounds: u32,
    o_rounds: u32,
    winning_score: u32,
}

impl TttMatch {
    /// Start a match; `first` moves first in every round.
    #[must_use]
    pub fn new(first: Marker) -> Self {
        Self {
            board: Board::new(),
            first,
            current: first,
            x_rounds: 0,
            o_rounds: 0,
            winning_score: DEFAULT_WINNING_SCORE,
        }
    }

    /// Override the round wins needed to take the match.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        assert!(score > 0, "winning score must be positive");
        self.winning_score = score;
        self
    }

    /// The board as it currently stands.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_marker(&self) -> Marker {
        self.current
    }

    /// Round wins as (X, O).
    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        (self.x_rounds, self.o_rounds)
    }

    /// Mark a square for the current player and pass the turn.
    ///
    /// The square must be unmarked and the round still live; both are
    /// guaranteed by the input collector.
    pub fn play_square(&mut self, square: SquareIx) {
        assert!(self.round_end().is_none(), "round is already over");
        self.board.mark(square, self.current);
        self.current = self.current.opponent();
    }

    /// Let the tactic policy move for the current player.
    ///
    /// Returns the square it chose.
    pub fn play_computer(&mut self, rng: &mut GameRng) -> SquareIx {
        assert!(self.round_end().is_none(), "round is already over");
        let square = tactics::choose_square(&self.board, self.current, rng);
        self.play_square(square);
        square
    }

    /// How the round ended, if it has.
    #[must_use]
    pub fn round_end(&self) -> Option<RoundEnd> {
        if let Some(marker) = self.board.winning_marker() {
            Some(RoundEnd::Win(marker))
        } else if self.board.is_full() {
            Some(RoundEnd::Draw)
        } else {
            None
        }
    }

    /// Score the finished round and clear the board for the next one.
    ///
    /// Returns how the round ended. Panics if the round is still live.
    pub fn finish_round(&mut self) -> RoundEnd {
        let end = self.round_end().expect("round is not over yet");

        match end {
            RoundEnd::Win(Marker::X) => self.x_rounds += 1,
            RoundEnd::Win(Marker::O) => self.o_rounds += 1,
            RoundEnd::Draw => {}
        }

        self.board.reset();
        self.current = self.first;
        end
    }

    /// The match winner, once someone has enough round wins.
    #[must_use]
    pub fn winner(&self) -> Option<Marker> {
        if self.x_rounds >= self.winning_score {
            Some(Marker::X)
        } else if self.o_rounds >= self.winning_score {
            Some(Marker::O)
        } else {
            None
        }
    }

    /// Has either player taken the match?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Clear board and scores for a fresh match.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = self.first;
        self.x_rounds = 0;
        self.o_rounds = 0;
    }
}
