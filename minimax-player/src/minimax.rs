//! Backing terminal scores up a [`SearchTree`].

use crate::state::{BoardState, Utility};
use crate::tree::{NodeId, SearchTree, Sides};
use std::ops::Not;

/// Whose choice a node's value reflects.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Level {
    Max,
    Min,
}

impl Not for Level {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Level::Max => Level::Min,
            Level::Min => Level::Max,
        }
    }
}

/// Score a finished position for the maximizing side.
#[inline]
pub fn terminal_utility<B: BoardState>(board: &B, sides: Sides<B::Symbol>) -> Utility {
    board.count_score(sides.max) - board.count_score(sides.min)
}

/// Starting bound for the max and min folds. Scores are not tied to the cell
/// count, so the bound comes from the integer range.
const SENTINEL: Utility = Utility::MAX;

/// The minimax value of the subtree rooted at `id`, with `level` choosing there.
pub fn evaluate<B: BoardState>(tree: &SearchTree<B>, id: NodeId, level: Level) -> Utility {
    match level {
        Level::Max => max_value(tree, id),
        Level::Min => min_value(tree, id),
    }
}

fn max_value<B: BoardState>(tree: &SearchTree<B>, id: NodeId) -> Utility {
    let node = tree.node(id);
    if node.is_terminal() {
        return terminal_utility(node.board(), node.sides());
    }

    node.children()
        .iter()
        .fold(-SENTINEL, |best, &child| {
            best.max(min_value(tree, child))
        })
}

fn min_value<B: BoardState>(tree: &SearchTree<B>, id: NodeId) -> Utility {
    let node = tree.node(id);
    if node.is_terminal() {
        return terminal_utility(node.board(), node.sides());
    }

    node.children()
        .iter()
        .fold(SENTINEL, |best, &child| {
            best.min(max_value(tree, child))
        })
}

/// Compute every node's value in one pass, without recursion.
///
/// The result is indexed by [`NodeId::index`]. Children always follow their
/// parent in the arena, so walking it backwards sees every child first.
pub fn backed_up_values<B: BoardState>(tree: &SearchTree<B>) -> Vec<Utility> {
    let mut values = vec![0; tree.len()];
    for id in tree.node_ids().rev() {
        let node = tree.node(id);
        let level = if node.side_to_move() == node.max_symbol() {
            Level::Max
        } else {
            Level::Min
        };

        let value = if node.is_terminal() {
            terminal_utility(node.board(), node.sides())
        } else {
            let children = node.children().iter().map(|child| values[child.index()]);
            match level {
                Level::Max => children.fold(-SENTINEL, Utility::max),
                Level::Min => children.fold(SENTINEL, Utility::min),
            }
        };
        values[id.index()] = value;
    }
    values
}
