//! 3×3 board representation and line analysis.
//!
//! Squares are addressed 1-9, reading order:
//!
//! ```text
//!  1 | 2 | 3
//! ---+---+---
//!  4 | 5 | 6
//! ---+---+---
//!  7 | 8 | 9
//! ```
//!
//! The eight winning lines are fixed data; win detection and at-risk
//! analysis both scan them in row, column, diagonal order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// The other player's mark.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

/// One board square: empty or marked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Square {
    #[default]
    Empty,
    Marked(Marker),
}

impl Square {
    /// True if no one has marked this square.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 1-based square address, 1 through 9.
///
/// Kept 1-based to match how players see the board; the newtype guards the
/// range so the board itself never bounds-checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SquareIx(u8);

impl SquareIx {
    /// The center square.
    pub const CENTER: SquareIx = SquareIx(5);

    /// Create a square address. Panics outside 1-9.
    #[must_use]
    pub const fn new(ix: u8) -> Self {
        assert!(ix >= 1 && ix <= 9, "square index must be 1-9");
        Self(ix)
    }

    /// The 1-based address as given by the player.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based offset into the squares array.
    #[must_use]
    pub const fn offset(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl std::fmt::Display for SquareIx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A winning line: three square addresses.
pub type Line = [SquareIx; 3];

const fn line(a: u8, b: u8, c: u8) -> Line {
    [SquareIx::new(a), SquareIx::new(b), SquareIx::new(c)]
}

/// The eight winning lines, in scan order: rows, columns, diagonals.
pub const WINNING_LINES: [Line; 8] = [
    line(1, 2, 3),
    line(4, 5, 6),
    line(7, 8, 9),
    line(1, 4, 7),
    line(2, 5, 8),
    line(3, 6, 9),
    line(1, 5, 9),
    line(3, 5, 7),
];

/// The 3×3 board.
///
/// Alternating-turn play guarantees at most one marker can hold a winning
/// line; the board reports the first such line in scan order and does not
/// police turn order itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The square at the given address.
    #[must_use]
    pub fn get(&self, ix: SquareIx) -> Square {
        self.squares[ix.offset()]
    }

    /// Mark a square for a player.
    ///
    /// The input collector only offers unmarked squares; marking a marked
    /// square is a programming error.
    pub fn mark(&mut self, ix: SquareIx, marker: Marker) {
        let square = &mut self.squares[ix.offset()];
        assert!(
            square.is_empty(),
            "square {ix} is already marked"
        );
        *square = Square::Marked(marker);
    }

    /// Clear every square for a new round.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Addresses of all unmarked squares, in board order.
    #[must_use]
    pub fn unmarked(&self) -> Vec<SquareIx> {
        (1..=9)
            .map(SquareIx::new)
            .filter(|ix| self.get(*ix).is_empty())
            .collect()
    }

    /// True when no unmarked squares remain.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// The first winning line whose three squares are marked identically.
    ///
    /// Scan order is rows, then columns, then diagonals. `None` if no one
    /// has three in a row.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        WINNING_LINES
            .into_iter()
            .find(|line| self.line_winner(*line).is_some())
    }

    /// The marker holding a winning line, if any.
    #[must_use]
    pub fn winning_marker(&self) -> Option<Marker> {
        WINNING_LINES
            .into_iter()
            .find_map(|line| self.line_winner(line))
    }

    /// Squares that would complete a line for `marker`.
    ///
    /// A line is at risk when exactly two of its squares carry `marker` and
    /// the third is empty; the empty square's address is reported. Called
    /// with the mover's own marker this finds winning moves; with the
    /// opponent's marker it finds squares that must be blocked.
    #[must_use]
    pub fn at_risk_squares(&self, marker: Marker) -> SmallVec<[SquareIx; 4]> {
        let mut at_risk = SmallVec::new();

        for line in WINNING_LINES {
            let marked = line
                .iter()
                .filter(|ix| self.get(**ix) == Square::Marked(marker))
                .count();
            let empty: SmallVec<[SquareIx; 3]> = line
                .iter()
                .copied()
                .filter(|ix| self.get(*ix).is_empty())
                .collect();

            if marked == 2 && empty.len() == 1 {
                at_risk.push(empty[0]);
            }
        }

        at_risk
    }

    fn line_winner(&self, line: Line) -> Option<Marker> {
        match (self.get(line[0]), self.get(line[1]), self.get(line[2])) {
            (Square::Marked(a), Square::Marked(b), Square::Marked(c)) if a == b && b == c => {
                Some(a)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ix(n: u8) -> SquareIx {
        SquareIx::new(n)
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(board.winning_line(), None);
        assert_eq!(board.winning_marker(), None);
        assert!(!board.is_full());
        assert_eq!(board.unmarked().len(), 9);
    }

    #[test]
    fn test_top_row_win() {
        let mut board = Board::new();
        board.mark(ix(1), Marker::X);
        board.mark(ix(2), Marker::X);
        board.mark(ix(3), Marker::X);

        assert_eq!(board.winning_line(), Some([ix(1), ix(2), ix(3)]));
        assert_eq!(board.winning_marker(), Some(Marker::X));
    }

    #[test]
    fn test_column_and_diagonal_wins() {
        let mut board = Board::new();
        board.mark(ix(2), Marker::O);
        board.mark(ix(5), Marker::O);
        board.mark(ix(8), Marker::O);
        assert_eq!(board.winning_line(), Some([ix(2), ix(5), ix(8)]));

        let mut board = Board::new();
        board.mark(ix(3), Marker::X);
        board.mark(ix(5), Marker::X);
        board.mark(ix(7), Marker::X);
        assert_eq!(board.winning_line(), Some([ix(3), ix(5), ix(7)]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.mark(ix(1), Marker::X);
        board.mark(ix(2), Marker::O);
        board.mark(ix(3), Marker::X);

        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_scan_order_reports_row_before_column() {
        // X holds both the top row and the left column.
        let mut board = Board::new();
        for n in [1, 2, 3, 4, 7] {
            board.mark(ix(n), Marker::X);
        }

        assert_eq!(board.winning_line(), Some([ix(1), ix(2), ix(3)]));
    }

    #[test]
    fn test_at_risk_detects_open_third_square() {
        let mut board = Board::new();
        board.mark(ix(1), Marker::X);
        board.mark(ix(2), Marker::X);

        let at_risk = board.at_risk_squares(Marker::X);
        assert_eq!(at_risk.as_slice(), &[ix(3)]);

        // O has no two-in-a-row anywhere.
        assert!(board.at_risk_squares(Marker::O).is_empty());
    }

    #[test]
    fn test_at_risk_ignores_blocked_lines() {
        let mut board = Board::new();
        board.mark(ix(1), Marker::X);
        board.mark(ix(2), Marker::X);
        board.mark(ix(3), Marker::O);

        assert!(board.at_risk_squares(Marker::X).is_empty());
    }

    #[test]
    fn test_at_risk_multiple_lines() {
        let mut board = Board::new();
        board.mark(ix(1), Marker::X);
        board.mark(ix(4), Marker::X);
        board.mark(ix(5), Marker::X);

        let at_risk = board.at_risk_squares(Marker::X);
        // Lines 4-5-6, 1-4-7, and 1-5-9 are each one square short.
        assert!(at_risk.contains(&ix(6)));
        assert!(at_risk.contains(&ix(7)));
        assert!(at_risk.contains(&ix(9)));
        assert_eq!(at_risk.len(), 3);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        // Fill without a winner: X O X / X O O / O X X
        let marks = [
            (1, Marker::X),
            (2, Marker::O),
            (3, Marker::X),
            (4, Marker::X),
            (5, Marker::O),
            (6, Marker::O),
            (7, Marker::O),
            (8, Marker::X),
            (9, Marker::X),
        ];
        for (n, m) in marks {
            board.mark(ix(n), m);
        }

        assert!(board.is_full());
        assert!(board.unmarked().is_empty());
        assert_eq!(board.winning_marker(), None);
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new();
        board.mark(ix(5), Marker::X);
        board.reset();

        assert_eq!(board, Board::new());
    }

    #[test]
    #[should_panic(expected = "already marked")]
    fn test_double_mark_panics() {
        let mut board = Board::new();
        board.mark(ix(5), Marker::X);
        board.mark(ix(5), Marker::O);
    }

    #[test]
    #[should_panic(expected = "square index must be 1-9")]
    fn test_out_of_range_index_panics() {
        let _ = SquareIx::new(10);
    }

    #[test]
    fn test_marker_opponent() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
    }

    #[test]
    fn test_board_serde_round_trip() {
        let mut board = Board::new();
        board.mark(ix(5), Marker::O);

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
