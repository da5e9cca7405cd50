//! `minimax-player` picks moves by exhaustive minimax search.
//!
//! Given a board and the side to move, the player builds the complete game tree
//! down to positions where the side to move has no legal move, scores those
//! positions by piece difference, and backs the scores up by alternating max and
//! min. There is no depth limit, pruning or heuristic evaluation, so this is only
//! practical on small boards or late endgames.
//!
//! The search is generic over any [`BoardState`]; [`minimax_othello::OthelloBoard`]
//! implements it out of the box.

pub mod graphviz;
pub mod minimax;
pub mod successors;
pub mod test_utils;
pub mod tree;

mod config;
mod player;
mod state;

pub use config::*;
pub use player::*;
pub use state::*;
pub use tree::{NodeId, SearchNode, SearchTree, Sides};
