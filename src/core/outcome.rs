//! Round outcomes shared by every game in the crate.

use serde::{Deserialize, Serialize};

/// Result of one round from a single participant's point of view.
///
/// Stored in move histories (RPSLS) and returned by round resolution
/// (Twenty-One). The orchestrator maps outcomes onto score counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// This participant won the round.
    Won,
    /// This participant lost the round.
    Lost,
    /// Neither side won.
    Tied,
}

impl RoundOutcome {
    /// The same round seen from the other side of the table.
    #[must_use]
    pub fn invert(self) -> Self {
        match self {
            RoundOutcome::Won => RoundOutcome::Lost,
            RoundOutcome::Lost => RoundOutcome::Won,
            RoundOutcome::Tied => RoundOutcome::Tied,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoundOutcome::Won => "won",
            RoundOutcome::Lost => "lost",
            RoundOutcome::Tied => "tied",
        };
        write!(f, "{}", s)
    }
}
