//! Code for working with [`Location`]s on the board.

use crate::bitboard::Bitboard;
use crate::utils::COLUMN_LETTERS;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A location in the 8x8 bitboard frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Into)]
pub struct Location(Bitboard);

/// A list of locations, which can be iterated to retrieve them.
/// Iteration runs from the bottom-right of the frame towards the upper-left.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a one-hot [`Bitboard`] without checking this invariant.
    /// Results in inconsistent state if `bitboard` has more than one location set.
    #[inline]
    pub fn from_onehot_unchecked(bitboard: Bitboard) -> Self {
        Self(bitboard)
    }

    /// Convert from a bit index: 0 for the bottom-right of the frame, 63 for the upper-left.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self(Bitboard::from(1u64 << index))
    }

    /// Convert into a bit index.
    #[inline]
    pub fn to_index(self) -> u8 {
        let bitboard: u64 = self.0.into();
        bitboard.trailing_zeros() as u8
    }

    /// Convert from column and row coordinates.
    /// Returns None if the coordinates are outside the frame.
    pub fn from_coords(col: usize, row: usize) -> Option<Self> {
        if col >= EDGE_LENGTH || row >= EDGE_LENGTH {
            return None;
        }

        let index = NUM_SPACES - 1 - (row * EDGE_LENGTH + col);
        Some(Self::from_index(index as u8))
    }

    /// Get the column and row coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let offset = NUM_SPACES - 1 - self.to_index() as usize;
        (offset % EDGE_LENGTH, offset / EDGE_LENGTH)
    }
}

/// Convert this [`Location`] into string notation ("A4": column A, row 4).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (col, row) = self.to_coords();
        let col_str = COLUMN_LETTERS.chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        write!(f, "{}", row + 1)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        let loc_bitboard: Bitboard = loc.into();
        !(loc_bitboard & self.0).is_empty()
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LETTERS.find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next() != None {
            return Err(ParseLocationError);
        }

        Self::from_coords(col, row - 1).ok_or(ParseLocationError)
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_move = Bitboard::from(1u64 << bitboard.trailing_zeros());
        self.0 ^= next_move;

        Some(Location::from_onehot_unchecked(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
