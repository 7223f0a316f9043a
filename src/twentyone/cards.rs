//! Cards and the deck for Twenty-One.
//!
//! A deck is 52 unique (face, suit) cards split into an undrawn pile,
//! shuffled once at construction, and a drawn pile that preserves draw
//! order. A card moves undrawn → drawn exactly once and never back.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Card face: pips 2-10 plus the courts and the ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Face {
    /// All thirteen faces.
    pub const ALL: [Face; 13] = [
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
        Face::Ace,
    ];

    /// Card value with the ace counted high.
    ///
    /// Pips count their number, courts count 10, the ace counts 11 here;
    /// hand valuation demotes aces to 1 as needed to stay under the target.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Face::Two => 2,
            Face::Three => 3,
            Face::Four => 4,
            Face::Five => 5,
            Face::Six => 6,
            Face::Seven => 7,
            Face::Eight => 8,
            Face::Nine => 9,
            Face::Ten | Face::Jack | Face::Queen | Face::King => 10,
            Face::Ace => 11,
        }
    }

    /// True for the ace, the only flexible-value face.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Face::Ace)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "Jack",
            Face::Queen => "Queen",
            Face::King => "King",
            Face::Ace => "Ace",
        };
        write!(f, "{}", s)
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Clubs,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        };
        write!(f, "{}", s)
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub face: Face,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}

/// A 52-card deck partitioned into undrawn and drawn piles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    undrawn: Vec<Card>,
    drawn: Vec<Card>,
}

impl Deck {
    /// Build a full deck and shuffle the undrawn pile.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut undrawn = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for face in Face::ALL {
                undrawn.push(Card::new(face, suit));
            }
        }
        rng.shuffle(&mut undrawn);

        Self {
            undrawn,
            drawn: Vec::new(),
        }
    }

    /// Move one card from the undrawn to the drawn pile and return it.
    ///
    /// `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.undrawn.pop()?;
        self.drawn.push(card);
        Some(card)
    }

    /// The most recently drawn card, for display.
    #[must_use]
    pub fn last_drawn(&self) -> Option<Card> {
        self.drawn.last().copied()
    }

    /// Cards left in the undrawn pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.undrawn.len()
    }

    /// Cards drawn so far, in draw order.
    #[must_use]
    pub fn drawn(&self) -> &[Card] {
        &self.drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_face_values() {
        assert_eq!(Face::Two.value(), 2);
        assert_eq!(Face::Ten.value(), 10);
        assert_eq!(Face::Jack.value(), 10);
        assert_eq!(Face::Queen.value(), 10);
        assert_eq!(Face::King.value(), 10);
        assert_eq!(Face::Ace.value(), 11);
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(Face::Ace, Suit::Spades);
        assert_eq!(format!("{}", card), "Ace of Spades");

        let card = Card::new(Face::Ten, Suit::Hearts);
        assert_eq!(format!("{}", card), "10 of Hearts");
    }

    #[test]
    fn test_deck_has_52_unique_cards() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::shuffled(&mut rng);

        let mut seen = HashSet::new();
        while let Some(card) = deck.draw() {
            assert!(seen.insert(card), "duplicate card drawn: {card}");
        }

        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_draw_moves_card_exactly_once() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::shuffled(&mut rng);

        let card = deck.draw().unwrap();
        assert_eq!(deck.remaining(), 51);
        assert_eq!(deck.last_drawn(), Some(card));
        assert_eq!(deck.drawn(), &[card]);
    }

    #[test]
    fn test_exhausted_deck_returns_none() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::shuffled(&mut rng);

        for _ in 0..52 {
            assert!(deck.draw().is_some());
        }
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        let mut rng3 = GameRng::new(43);

        let mut d1 = Deck::shuffled(&mut rng1);
        let mut d2 = Deck::shuffled(&mut rng2);
        let mut d3 = Deck::shuffled(&mut rng3);

        let seq1: Vec<_> = (0..10).map(|_| d1.draw().unwrap()).collect();
        let seq2: Vec<_> = (0..10).map(|_| d2.draw().unwrap()).collect();
        let seq3: Vec<_> = (0..10).map(|_| d3.draw().unwrap()).collect();

        assert_eq!(seq1, seq2);
        assert_ne!(seq1, seq3);
    }

    #[test]
    fn test_drawn_preserves_order() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::shuffled(&mut rng);

        let a = deck.draw().unwrap();
        let b = deck.draw().unwrap();
        let c = deck.draw().unwrap();

        assert_eq!(deck.drawn(), &[a, b, c]);
    }
}
