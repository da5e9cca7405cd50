//! The game tree explored by the search.
//!
//! Nodes live in a flat arena addressed by [`NodeId`], in the order they were
//! generated: breadth-first from the root, so every child comes after its parent.
//! Dropping the [`SearchTree`] frees every node.

use crate::config::{PassRule, SearchConfig};
use crate::state::{BoardState, Move};
use crate::successors::{generate_successors, has_legal_move};
use std::collections::VecDeque;
use tracing::debug;

/// Index of a node in a [`SearchTree`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The two sides of a search: `max` is the side choosing a move, `min` its opponent.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Sides<S> {
    pub max: S,
    pub min: S,
}

impl<S: Copy + Eq> Sides<S> {
    /// Get the side that moves after `symbol`.
    #[inline]
    pub fn other(&self, symbol: S) -> S {
        if symbol == self.max {
            self.min
        } else {
            self.max
        }
    }
}

/// One position in the tree.
#[derive(Clone, Debug)]
pub struct SearchNode<B: BoardState> {
    board: B,
    parent: Option<NodeId>,
    played_move: Option<Move>,
    sides: Sides<B::Symbol>,
    side_to_move: B::Symbol,
    depth: usize,
    children: Vec<NodeId>,
}

impl<B: BoardState> SearchNode<B> {
    #[inline]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// The node this one was generated from; None at the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The move that produced this node from its parent.
    /// None at the root, and for a pass under [`PassRule::Standard`].
    #[inline]
    pub fn played_move(&self) -> Option<Move> {
        self.played_move
    }

    #[inline]
    pub fn sides(&self) -> Sides<B::Symbol> {
        self.sides
    }

    #[inline]
    pub fn max_symbol(&self) -> B::Symbol {
        self.sides.max
    }

    #[inline]
    pub fn min_symbol(&self) -> B::Symbol {
        self.sides.min
    }

    /// The side whose moves lead to this node's children.
    #[inline]
    pub fn side_to_move(&self) -> B::Symbol {
        self.side_to_move
    }

    /// Number of plies (including passes) between the root and this node.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }
}

/// A fully expanded game tree.
#[derive(Clone, Debug)]
pub struct SearchTree<B: BoardState> {
    nodes: Vec<SearchNode<B>>,
    config: SearchConfig,
}

impl<B: BoardState> SearchTree<B> {
    /// Expand every position reachable from `board` with `sides.max` to move.
    pub fn build(board: B, sides: Sides<B::Symbol>, config: SearchConfig) -> Self {
        let root = SearchNode {
            board,
            parent: None,
            played_move: None,
            sides,
            side_to_move: sides.max,
            depth: 0,
            children: Vec::new(),
        };
        let mut tree = Self {
            nodes: vec![root],
            config,
        };

        let mut unexpanded: VecDeque<NodeId> = VecDeque::new();
        unexpanded.push_back(tree.root());
        while let Some(id) = unexpanded.pop_front() {
            tree.expand(id);
            unexpanded.extend(tree.node(id).children.iter().copied());
        }

        debug!(
            nodes = tree.len(),
            leaves = tree.leaf_count(),
            height = tree.height(),
            "built search tree"
        );
        tree
    }

    /// Populate the children of `id`, once.
    fn expand(&mut self, id: NodeId) {
        let (successors, next_side, pass_board) = {
            let node = self.node(id);
            let next_side = node.sides.other(node.side_to_move);
            let successors = generate_successors(&node.board, node.side_to_move);

            // The root never passes: no move there means no move to choose.
            let passes = successors.is_empty()
                && node.parent.is_some()
                && self.config.pass_rule == PassRule::Standard
                && has_legal_move(&node.board, next_side);

            (
                successors,
                next_side,
                if passes {
                    Some(node.board.clone())
                } else {
                    None
                },
            )
        };

        if let Some(board) = pass_board {
            self.push_child(id, board, None, next_side);
        }
        for successor in successors {
            self.push_child(id, successor.board, Some(successor.mv), next_side);
        }
    }

    fn push_child(
        &mut self,
        parent: NodeId,
        board: B,
        played_move: Option<Move>,
        side_to_move: B::Symbol,
    ) {
        let child = NodeId(self.nodes.len());
        let (sides, depth) = {
            let parent_node = self.node(parent);
            (parent_node.sides, parent_node.depth + 1)
        };

        self.nodes.push(SearchNode {
            board,
            parent: Some(parent),
            played_move,
            sides,
            side_to_move,
            depth,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(child);
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &SearchNode<B> {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn sides(&self) -> Sides<B::Symbol> {
        self.node(self.root()).sides
    }

    /// Number of nodes, including the root. Never zero.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// All node ids, parents before children.
    pub fn node_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + ExactSizeIterator {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_terminal()).count()
    }

    /// Depth of the deepest node.
    pub fn height(&self) -> usize {
        // Breadth-first order: the last node is among the deepest.
        self.nodes.last().map_or(0, |node| node.depth)
    }
}
