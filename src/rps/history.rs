//! Per-player move history for backward-looking strategies.

use serde::{Deserialize, Serialize};

use crate::core::RoundOutcome;

use super::moves::Move;

/// One round as remembered by a single player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move this player made.
    pub mv: Move,
    /// How the round went for this player.
    pub outcome: RoundOutcome,
}

/// Append-only record of one player's moves within a match.
///
/// Owned exclusively by its player; the adaptive strategies read it but
/// never write it. Cleared when a match resets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one round's move and outcome.
    pub fn record(&mut self, mv: Move, outcome: RoundOutcome) {
        self.records.push(MoveRecord { mv, outcome });
    }

    /// Forget everything, for a match reset.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of rounds recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no rounds have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in play order.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    /// Moves that produced the given outcome, in play order.
    pub fn with_outcome(&self, outcome: RoundOutcome) -> impl Iterator<Item = Move> + '_ {
        self.records
            .iter()
            .filter(move |r| r.outcome == outcome)
            .map(|r| r.mv)
    }
}
