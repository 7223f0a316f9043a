//! Computer move selection: win now, block, take the center, or guess.
//!
//! A greedy one-ply heuristic, not minimax; it can be beaten. The priority
//! order is part of the observable contract and must not be reordered.

use tracing::trace;

use crate::core::GameRng;

use super::board::{Board, Marker, SquareIx};

/// Choose a square for `own` using the offense/defense/center/random policy.
///
/// Priority, first applicable wins:
/// 1. complete one of our own lines (immediate win),
/// 2. block an opponent line that is one square from completion,
/// 3. take the center if it is open,
/// 4. any unmarked square, uniformly at random.
///
/// Ties within the first two tiers break randomly. Panics if the board is
/// full; callers only ask for a move when one exists.
pub fn choose_square(board: &Board, own: Marker, rng: &mut GameRng) -> SquareIx {
    assert!(!board.is_full(), "no unmarked square to choose");

    let winning = board.at_risk_squares(own);
    if let Some(&square) = rng.choose(&winning) {
        trace!(%square, "taking winning square");
        return square;
    }

    let blocking = board.at_risk_squares(own.opponent());
    if let Some(&square) = rng.choose(&blocking) {
        trace!(%square, "blocking opponent");
        return square;
    }

    if board.get(SquareIx::CENTER).is_empty() {
        return SquareIx::CENTER;
    }

    *rng.choose(&board.unmarked())
        .expect("board is not full, so an unmarked square exists")
}
