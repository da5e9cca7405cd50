//! The boundary between the search and the game being searched.

use minimax_othello::{Location, OthelloBoard, Player};
use std::fmt::{self, Debug};

/// A search value: the maximizer's score minus the minimizer's score.
pub type Utility = i32;

/// A piece placement at `(col, row)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub col: usize,
    pub row: usize,
}

impl Move {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        let (col, row) = loc.to_coords();
        Self { col, row }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A board the search can explore.
///
/// Boards have value semantics: the search clones a board before playing a move
/// on it, and never mutates a board anyone else holds.
pub trait BoardState: Clone {
    /// Identifies one of the two sides.
    type Symbol: Copy + Eq + Debug;

    fn num_cols(&self) -> usize;

    fn num_rows(&self) -> usize;

    /// The two symbols in play on this board.
    fn symbols(&self) -> (Self::Symbol, Self::Symbol);

    /// Returns whether `symbol` may move at `(col, row)`. Must not panic for
    /// coordinates inside `num_cols` x `num_rows`.
    fn is_legal_move(&self, col: usize, row: usize, symbol: Self::Symbol) -> bool;

    /// Play a move in place. Only called after [`BoardState::is_legal_move`] accepted it.
    fn play_move(&mut self, col: usize, row: usize, symbol: Self::Symbol);

    /// The number of cells belonging to `symbol`.
    fn count_score(&self, symbol: Self::Symbol) -> Utility;
}

impl BoardState for OthelloBoard {
    type Symbol = Player;

    #[inline]
    fn num_cols(&self) -> usize {
        OthelloBoard::num_cols(self)
    }

    #[inline]
    fn num_rows(&self) -> usize {
        OthelloBoard::num_rows(self)
    }

    #[inline]
    fn symbols(&self) -> (Player, Player) {
        OthelloBoard::symbols(self)
    }

    #[inline]
    fn is_legal_move(&self, col: usize, row: usize, symbol: Player) -> bool {
        OthelloBoard::is_legal_move(self, col, row, symbol)
    }

    #[inline]
    fn play_move(&mut self, col: usize, row: usize, symbol: Player) {
        if let Some(loc) = Location::from_coords(col, row) {
            self.play_move_unchecked(loc, symbol);
        }
    }

    #[inline]
    fn count_score(&self, symbol: Player) -> Utility {
        Utility::from(OthelloBoard::count_score(self, symbol))
    }
}
