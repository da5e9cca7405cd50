//! Low-level bitboard operations.
//!
//! For efficiency, [`Bitboard`] operations are unchecked and may produce
//! inconsistent boards if invalid data is passed.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the frame, and bits proceed in row-major order.
//! Boards smaller than the frame live in its upper-left corner; a grid mask
//! (see [`grid_mask`]) marks which locations are in play.

use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on the 8x8 frame.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

// Masks clearing the leftmost and rightmost frame columns, applied after a shift
// that could wrap a bit onto the neighbouring row.
const NOT_LEFT_COLUMN: u64 = 0x7f7f_7f7f_7f7f_7f7f;
const NOT_RIGHT_COLUMN: u64 = 0xfefe_fefe_fefe_fefe;

/// The eight straight lines a capture can run along.
#[derive(Clone, Copy, Debug)]
enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// Move every set bit one step in this direction, dropping bits that leave the frame.
    #[inline]
    fn shift(self, bits: u64) -> u64 {
        match self {
            Direction::North => bits << 8,
            Direction::NorthEast => (bits << 7) & NOT_LEFT_COLUMN,
            Direction::East => (bits >> 1) & NOT_LEFT_COLUMN,
            Direction::SouthEast => (bits >> 9) & NOT_LEFT_COLUMN,
            Direction::South => bits >> 8,
            Direction::SouthWest => (bits >> 7) & NOT_RIGHT_COLUMN,
            Direction::West => (bits << 1) & NOT_RIGHT_COLUMN,
            Direction::NorthWest => (bits << 9) & NOT_RIGHT_COLUMN,
        }
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            EDGE_LENGTH,
            EDGE_LENGTH,
            f,
        )
    }
}

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Mask of the locations in play on a board of `cols` x `rows`,
/// anchored at the upper-left corner of the frame.
/// Dimensions above [`EDGE_LENGTH`] are clamped to the frame.
pub fn grid_mask(cols: usize, rows: usize) -> Bitboard {
    let mut mask = 0u64;
    for row in 0..rows.min(EDGE_LENGTH) {
        for col in 0..cols.min(EDGE_LENGTH) {
            mask |= 1u64 << (NUM_SPACES - 1 - (row * EDGE_LENGTH + col));
        }
    }
    Bitboard(mask)
}

/// Score a board as: # my pieces - # opponent pieces.
/// Undefined behavior if both players have a piece at the same location.
#[inline]
pub fn score_absolute_difference(active: Bitboard, opponent: Bitboard) -> i8 {
    (active.0.count_ones() as i8) - (opponent.0.count_ones() as i8)
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces, the opponent's pieces, and the grid.
/// A move is legal when it lands on an empty location in the grid and closes at
/// least one straight run of opponent pieces against an active piece.
/// Undefined behavior if either player has pieces outside `grid`.
#[inline]
pub fn get_move_mask(active: Bitboard, opponent: Bitboard, grid: Bitboard) -> Bitboard {
    let empties = !(active.0 | opponent.0) & grid.0;
    let mut moves = 0u64;

    for &direction in DIRECTIONS.iter() {
        // Smear our pieces across adjacent opponent runs. A run holds at most
        // EDGE_LENGTH - 2 pieces, so EDGE_LENGTH - 3 extra steps cover it.
        let mut run = direction.shift(active.0) & opponent.0;
        for _ in 0..EDGE_LENGTH - 3 {
            run |= direction.shift(run) & opponent.0;
        }

        // One step past the end of a run is a capture, if it's empty.
        moves |= direction.shift(run) & empties;
    }

    Bitboard(moves)
}

/// Compute an updated board after a given move is made, returning new bitboards
/// for the active player and the opponent. `move_mask` must be a one-hot bitboard
/// indicating the move location. Undefined behavior if an invalid board
/// or `move_mask` is provided.
#[inline]
pub fn apply_move(
    active: Bitboard,
    opponent: Bitboard,
    move_mask: Bitboard,
) -> (Bitboard, Bitboard) {
    let mut flip_mask = 0u64;

    for &direction in DIRECTIONS.iter() {
        let mut captured = 0u64;
        let mut cursor = direction.shift(move_mask.0);

        while cursor & opponent.0 != 0 {
            captured |= cursor;
            cursor = direction.shift(cursor);
        }

        // The run only flips if it is closed off by one of our pieces.
        if cursor & active.0 != 0 {
            flip_mask |= captured;
        }
    }

    let new_active = Bitboard(active.0 | flip_mask | move_mask.0);
    let new_opponent = Bitboard(opponent.0 ^ flip_mask);

    (new_active, new_opponent)
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = !(self.bitboard & bitmask).is_empty();
        self.remaining -= 1;

        Some(bit)
    }
}

impl ExactSizeIterator for Bits {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}
