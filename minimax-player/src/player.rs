//! Choosing a move: the top level of the search.

use crate::config::SearchConfig;
use crate::minimax::{evaluate, Level};
use crate::state::{BoardState, Move, Utility};
use crate::tree::{SearchTree, Sides};
use derive_more::{Display, Error};
use std::fmt::Debug;
use tracing::{debug, instrument, trace};

/// A search that could not start.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    #[display(fmt = "the board has no cells ({}x{})", cols, rows)]
    EmptyGrid { cols: usize, rows: usize },

    #[display(fmt = "both sides of the board use the symbol {}", symbol)]
    DegenerateSymbols { symbol: String },

    #[display(
        fmt = "symbol {} is not in play (the board uses {} and {})",
        symbol,
        first,
        second
    )]
    SymbolNotInPlay {
        symbol: String,
        first: String,
        second: String,
    },
}

/// How a game ends under best play from both sides.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display)]
pub enum Outlook {
    #[display(fmt = "win")]
    Win,
    #[display(fmt = "draw")]
    Draw,
    #[display(fmt = "loss")]
    Loss,
}

/// A selected move and its backed-up value for the side that plays it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Choice {
    pub mv: Move,
    pub value: Utility,
}

impl Choice {
    pub fn outlook(&self) -> Outlook {
        match self.value {
            v if v > 0 => Outlook::Win,
            0 => Outlook::Draw,
            _ => Outlook::Loss,
        }
    }
}

/// Find the symbol playing against `symbol` on `board`.
pub fn opponent_of<B: BoardState>(board: &B, symbol: B::Symbol) -> Result<B::Symbol, SearchError> {
    let (cols, rows) = (board.num_cols(), board.num_rows());
    if cols == 0 || rows == 0 {
        return Err(SearchError::EmptyGrid { cols, rows });
    }

    let (first, second) = board.symbols();
    if first == second {
        return Err(SearchError::DegenerateSymbols {
            symbol: format!("{:?}", first),
        });
    }

    if symbol == first {
        Ok(second)
    } else if symbol == second {
        Ok(first)
    } else {
        Err(SearchError::SymbolNotInPlay {
            symbol: format!("{:?}", symbol),
            first: format!("{:?}", first),
            second: format!("{:?}", second),
        })
    }
}

/// Check the preconditions and expand the full game tree with `symbol` to move.
pub fn build_tree<B: BoardState>(
    board: &B,
    symbol: B::Symbol,
    config: SearchConfig,
) -> Result<SearchTree<B>, SearchError> {
    let opponent = opponent_of(board, symbol)?;
    let sides = Sides {
        max: symbol,
        min: opponent,
    };
    Ok(SearchTree::build(board.clone(), sides, config))
}

/// Evaluate each move at the root and keep the best.
/// Ties go to the move generated first. None if the root has no moves.
pub fn best_choice<B: BoardState>(tree: &SearchTree<B>) -> Option<Choice> {
    let mut best: Option<Choice> = None;

    for &child in tree.node(tree.root()).children() {
        let mv = match tree.node(child).played_move() {
            Some(mv) => mv,
            None => continue,
        };
        let value = evaluate(tree, child, Level::Min);
        trace!(%mv, value, "evaluated root move");

        if best.map_or(true, |b| value > b.value) {
            best = Some(Choice { mv, value });
        }
    }

    best
}

/// Search the whole game from `board` and pick the best move for `symbol`.
///
/// Returns `Ok(None)` when `symbol` has no legal move.
#[instrument(level = "debug", skip(board))]
pub fn select_move<B: BoardState>(
    board: &B,
    symbol: B::Symbol,
    config: SearchConfig,
) -> Result<Option<Choice>, SearchError> {
    let tree = build_tree(board, symbol, config)?;
    let choice = best_choice(&tree);

    match choice {
        None => debug!("no legal move"),
        Some(choice) => match choice.outlook() {
            Outlook::Win => debug!(mv = %choice.mv, value = choice.value, "chose move"),
            Outlook::Draw => debug!(mv = %choice.mv, "chose move, draw is the best outcome"),
            Outlook::Loss => debug!(
                mv = %choice.mv,
                value = choice.value,
                "chose move, loss is unavoidable"
            ),
        },
    }

    Ok(choice)
}

/// Anything that can pick moves for one side of a game.
pub trait Strategy<B: BoardState> {
    /// The side this strategy plays.
    fn symbol(&self) -> B::Symbol;

    /// Pick a move on `board`, or None if there is no legal move.
    fn choose_move(&mut self, board: &B) -> Result<Option<Move>, SearchError>;
}

/// Plays one side by exhaustive minimax search.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct MinimaxPlayer<S> {
    symbol: S,
    config: SearchConfig,
}

impl<S: Copy + Eq + Debug> MinimaxPlayer<S> {
    pub fn new(symbol: S) -> Self {
        Self {
            symbol,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(self, config: SearchConfig) -> Self {
        Self { config, ..self }
    }

    pub fn symbol(&self) -> S {
        self.symbol
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn select_move<B>(&self, board: &B) -> Result<Option<Choice>, SearchError>
    where
        B: BoardState<Symbol = S>,
    {
        select_move(board, self.symbol, self.config)
    }

    /// The tree this player would search on `board`, for inspection.
    pub fn build_tree<B>(&self, board: &B) -> Result<SearchTree<B>, SearchError>
    where
        B: BoardState<Symbol = S>,
    {
        build_tree(board, self.symbol, self.config)
    }
}

impl<B: BoardState> Strategy<B> for MinimaxPlayer<B::Symbol> {
    fn symbol(&self) -> B::Symbol {
        self.symbol
    }

    fn choose_move(&mut self, board: &B) -> Result<Option<Move>, SearchError> {
        Ok(self.select_move(board)?.map(|choice| choice.mv))
    }
}
