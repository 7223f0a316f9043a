//! Move rules for the five-way Rock-Paper-Scissors variant.
//!
//! The beats relation is the classic pentagon: every move defeats exactly
//! two others and is defeated by the remaining two. The relation is encoded
//! as static tables rather than per-move types, so resolving a round is a
//! pair of table lookups with no runtime type inspection.

use serde::{Deserialize, Serialize};

/// A move in Rock-Paper-Scissors-Lizard-Spock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    /// All five moves, in canonical order.
    ///
    /// Weight tables and uniform draws index into this array.
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// Position of this move in [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
            Move::Lizard => 3,
            Move::Spock => 4,
        }
    }

    /// The two moves this move defeats.
    #[must_use]
    pub const fn defeats(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Paper => [Move::Rock, Move::Spock],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Lizard => [Move::Paper, Move::Spock],
            Move::Spock => [Move::Rock, Move::Scissors],
        }
    }

    /// The two moves that defeat this move.
    ///
    /// Used by the counter-seeking strategy to prepare answers to the
    /// opponent's historically successful moves.
    #[must_use]
    pub const fn defeaters(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Paper, Move::Spock],
            Move::Paper => [Move::Scissors, Move::Lizard],
            Move::Scissors => [Move::Rock, Move::Spock],
            Move::Lizard => [Move::Scissors, Move::Rock],
            Move::Spock => [Move::Paper, Move::Lizard],
        }
    }

    /// Does this move defeat `other`?
    ///
    /// Equal moves tie; `beats` is false in both directions for them.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        let [a, b] = self.defeats();
        other == a || other == b
    }

    /// Narrative verb for displaying a resolved round.
    ///
    /// Defined for every ordered pair of distinct moves: active voice when
    /// this move wins ("Rock *crushes* Scissors"), passive when it loses
    /// ("Rock *covered by* Paper"). Callers never pass equal moves; ties
    /// have no verb.
    #[must_use]
    pub fn action_verb(self, other: Move) -> &'static str {
        assert!(self != other, "equal moves tie and have no action verb");

        match (self, other) {
            (Move::Rock, Move::Scissors) => "crushes",
            (Move::Rock, Move::Lizard) => "crushes",
            (Move::Rock, Move::Paper) => "covered by",
            (Move::Rock, Move::Spock) => "vaporized by",

            (Move::Paper, Move::Rock) => "covers",
            (Move::Paper, Move::Spock) => "disproves",
            (Move::Paper, Move::Scissors) => "cut by",
            (Move::Paper, Move::Lizard) => "eaten by",

            (Move::Scissors, Move::Paper) => "cuts",
            (Move::Scissors, Move::Lizard) => "decapitates",
            (Move::Scissors, Move::Rock) => "crushed by",
            (Move::Scissors, Move::Spock) => "smashed by",

            (Move::Lizard, Move::Paper) => "eats",
            (Move::Lizard, Move::Spock) => "poisons",
            (Move::Lizard, Move::Scissors) => "decapitated by",
            (Move::Lizard, Move::Rock) => "crushed by",

            (Move::Spock, Move::Rock) => "vaporizes",
            (Move::Spock, Move::Scissors) => "smashes",
            (Move::Spock, Move::Paper) => "disproved by",
            (Move::Spock, Move::Lizard) => "poisoned by",

            _ => unreachable!("equal moves rejected above"),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Lizard => "Lizard",
            Move::Spock => "Spock",
        };
        write!(f, "{}", s)
    }
}
