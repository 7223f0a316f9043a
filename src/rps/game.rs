//! Match orchestration state for an RPSLS session.
//!
//! Pure state machine: the caller supplies validated human moves and an RNG,
//! and reads the report back out for display. No I/O happens here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, RoundOutcome};

use super::history::MoveHistory;
use super::moves::Move;
use super::strategy::{Profile, Strategy};

/// First player to reach this score wins the match, unless overridden.
pub const DEFAULT_WINNING_SCORE: u32 = 5;

/// Which side took the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchWinner {
    Human,
    Computer,
}

/// Everything the display layer needs about one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// The human's move.
    pub human_move: Move,
    /// The computer's move.
    pub computer_move: Move,
    /// Round result from the human's perspective.
    pub outcome: RoundOutcome,
    /// Narrative verb for "human_move <verb> computer_move"; `None` on a tie.
    pub verb: Option<&'static str>,
}

/// Score and history state for one RPSLS match.
///
/// The computer opponent is fixed at match start. Histories are append-only
/// within the match and cleared by [`RpsMatch::reset`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RpsMatch {
    profile: Profile,
    winning_score: u32,
    human_score: u32,
    computer_score: u32,
    human_history: MoveHistory,
    computer_history: MoveHistory,
}

impl RpsMatch {
    /// Start a match against the given opponent profile.
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            winning_score: DEFAULT_WINNING_SCORE,
            human_score: 0,
            computer_score: 0,
            human_history: MoveHistory::new(),
            computer_history: MoveHistory::new(),
        }
    }

    /// Override the points needed to win the match.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        assert!(score > 0, "winning score must be positive");
        self.winning_score = score;
        self
    }

    /// Play one round against the computer.
    ///
    /// Chooses the computer's move from its profile, resolves the round,
    /// appends both histories, and updates the score. Ties score nothing.
    pub fn play_round(&mut self, human_move: Move, rng: &mut GameRng) -> RoundReport {
        assert!(!self.is_over(), "match is already decided");

        let computer_move =
            self.profile
                .choose(&self.computer_history, &self.human_history, rng);

        let outcome = if human_move == computer_move {
            RoundOutcome::Tied
        } else if human_move.beats(computer_move) {
            RoundOutcome::Won
        } else {
            RoundOutcome::Lost
        };

        self.human_history.record(human_move, outcome);
        self.computer_history.record(computer_move, outcome.invert());

        match outcome {
            RoundOutcome::Won => self.human_score += 1,
            RoundOutcome::Lost => self.computer_score += 1,
            RoundOutcome::Tied => {}
        }

        debug!(%human_move, %computer_move, %outcome, "round resolved");

        let verb = (human_move != computer_move).then(|| human_move.action_verb(computer_move));

        RoundReport {
            human_move,
            computer_move,
            outcome,
            verb,
        }
    }

    /// The opponent profile for this match.
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Current (human, computer) score.
    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        (self.human_score, self.computer_score)
    }

    /// The human's move history.
    #[must_use]
    pub fn human_history(&self) -> &MoveHistory {
        &self.human_history
    }

    /// The computer's move history.
    #[must_use]
    pub fn computer_history(&self) -> &MoveHistory {
        &self.computer_history
    }

    /// Has either side reached the winning score?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// The match winner, if the match is decided.
    #[must_use]
    pub fn winner(&self) -> Option<MatchWinner> {
        if self.human_score >= self.winning_score {
            Some(MatchWinner::Human)
        } else if self.computer_score >= self.winning_score {
            Some(MatchWinner::Computer)
        } else {
            None
        }
    }

    /// Clear scores and histories for a fresh match against the same profile.
    pub fn reset(&mut self) {
        self.human_score = 0;
        self.computer_score = 0;
        self.human_history.clear();
        self.computer_history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_against_always_rock() {
        let mut game = RpsMatch::new(Profile::AlwaysRock);
        let mut rng = GameRng::new(42);

        let report = game.play_round(Move::Paper, &mut rng);

        assert_eq!(report.computer_move, Move::Rock);
        assert_eq!(report.outcome, RoundOutcome::Won);
        assert_eq!(report.verb, Some("covers"));
        assert_eq!(game.scores(), (1, 0));
    }

    #[test]
    fn test_tie_has_no_verb_and_no_score() {
        let mut game = RpsMatch::new(Profile::AlwaysRock);
        let mut rng = GameRng::new(42);

        let report = game.play_round(Move::Rock, &mut rng);

        assert_eq!(report.outcome, RoundOutcome::Tied);
        assert_eq!(report.verb, None);
        assert_eq!(game.scores(), (0, 0));
    }

    #[test]
    fn test_losing_round_reports_passive_verb() {
        let mut game = RpsMatch::new(Profile::AlwaysRock);
        let mut rng = GameRng::new(42);

        let report = game.play_round(Move::Scissors, &mut rng);

        assert_eq!(report.outcome, RoundOutcome::Lost);
        assert_eq!(report.verb, Some("crushed by"));
        assert_eq!(game.scores(), (0, 1));
    }

    #[test]
    fn test_histories_mirror_each_other() {
        let mut game = RpsMatch::new(Profile::AlwaysRock);
        let mut rng = GameRng::new(42);

        game.play_round(Move::Paper, &mut rng);

        let human: Vec<_> = game.human_history().iter().copied().collect();
        let computer: Vec<_> = game.computer_history().iter().copied().collect();

        assert_eq!(human[0].mv, Move::Paper);
        assert_eq!(human[0].outcome, RoundOutcome::Won);
        assert_eq!(computer[0].mv, Move::Rock);
        assert_eq!(computer[0].outcome, RoundOutcome::Lost);
    }

    #[test]
    fn test_match_ends_at_winning_score() {
        let mut game = RpsMatch::new(Profile::AlwaysRock).with_winning_score(2);
        let mut rng = GameRng::new(42);

        game.play_round(Move::Paper, &mut rng);
        assert!(!game.is_over());

        game.play_round(Move::Paper, &mut rng);
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(MatchWinner::Human));
    }

    #[test]
    #[should_panic(expected = "already decided")]
    fn test_no_rounds_after_match_over() {
        let mut game = RpsMatch::new(Profile::AlwaysRock).with_winning_score(1);
        let mut rng = GameRng::new(42);

        game.play_round(Move::Paper, &mut rng);
        game.play_round(Move::Paper, &mut rng);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut game = RpsMatch::new(Profile::AlwaysRock).with_winning_score(1);
        let mut rng = GameRng::new(42);

        game.play_round(Move::Paper, &mut rng);
        assert!(game.is_over());

        game.reset();

        assert_eq!(game.scores(), (0, 0));
        assert!(!game.is_over());
        assert!(game.human_history().is_empty());
        assert!(game.computer_history().is_empty());
    }

    #[test]
    fn test_adaptive_opponent_full_match_is_deterministic() {
        let play = || {
            let mut game = RpsMatch::new(Profile::CounterSeeking).with_winning_score(3);
            let mut rng = GameRng::new(7);
            let mut reports = Vec::new();
            let human = [Move::Rock, Move::Paper, Move::Spock, Move::Lizard];

            for i in 0.. {
                if game.is_over() {
                    break;
                }
                reports.push(game.play_round(human[i % 4], &mut rng));
            }
            reports
        };

        assert_eq!(play(), play());
    }
}
