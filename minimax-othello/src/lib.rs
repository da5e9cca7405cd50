//! `minimax-othello` is a small, exact Othello board for search experiments.
//!
//! Boards may be any size from 1x1 up to 8x8. Every board is stored in an 8x8
//! bitboard frame, anchored at the upper-left corner, so the same bit-twiddling
//! works for every size.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with pairs of
//!    bitboards. These are fast, but may result in inconsistent state if their
//!    contracts are not manually checked.
//!  - [`OthelloBoard`] is a safe, value-semantics board addressed by `(col, row)`
//!    coordinates and [`Player`]s, suitable for driving a game-tree search.

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of the bitboard frame.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces in the bitboard frame.
pub const NUM_SPACES: usize = 64;
