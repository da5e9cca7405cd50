//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Letters used to label board columns.
pub const COLUMN_LETTERS: &str = "ABCDEFGH";

/// Format `cols * rows` characters into a pretty grid format.
/// `piece_iter` must yield exactly `cols * rows` items, in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    cols: usize,
    rows: usize,
    f: &mut Formatter,
) -> fmt::Result {
    write!(f, " ")?;
    for letter in COLUMN_LETTERS.chars().take(cols) {
        write!(f, " {}", letter)?;
    }

    for row in 0..rows {
        write!(f, "\n{} ", row + 1)?;
        for _ in 0..cols {
            write!(f, "{} ", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
