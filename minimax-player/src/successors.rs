//! The successor function: every board reachable in one move.

use crate::state::{BoardState, Move};
use itertools::iproduct;

/// A board reached by playing `mv`.
#[derive(Clone, Debug, PartialEq)]
pub struct Successor<B> {
    pub board: B,
    pub mv: Move,
}

/// Scan every cell, columns outermost, and yield the coordinates `symbol` may play.
fn legal_moves<'a, B: BoardState>(
    board: &'a B,
    symbol: B::Symbol,
) -> impl Iterator<Item = (usize, usize)> + 'a
where
    B::Symbol: 'a,
{
    iproduct!(0..board.num_cols(), 0..board.num_rows())
        .filter(move |&(col, row)| board.is_legal_move(col, row, symbol))
}

/// Generate one successor per legal move of `symbol`, in column-major scan order.
/// The input board is left untouched; each successor owns a fresh copy.
pub fn generate_successors<B: BoardState>(board: &B, symbol: B::Symbol) -> Vec<Successor<B>> {
    legal_moves(board, symbol)
        .map(|(col, row)| {
            let mut next = board.clone();
            next.play_move(col, row, symbol);
            Successor {
                board: next,
                mv: Move::new(col, row),
            }
        })
        .collect()
}

/// Returns whether `symbol` has any legal move, without building successors.
pub fn has_legal_move<B: BoardState>(board: &B, symbol: B::Symbol) -> bool {
    legal_moves(board, symbol).next().is_some()
}
