//! Utilities for testing searches against hand-written game trees.

use crate::state::{BoardState, Utility};
use std::fmt;
use std::rc::Rc;

/// A game tree written out by hand.
#[derive(Clone, Debug, PartialEq)]
pub enum Scripted {
    /// A finished game, with the scores of the first and second symbol.
    Leaf(Utility, Utility),
    /// A position where the side to move may play in any listed column of row 0.
    Branch(Vec<(usize, Scripted)>),
}

/// A [`BoardState`] that walks a [`Scripted`] tree.
///
/// Either side may play any scripted move, so the script alone decides the
/// shape of the search. Clones share the script.
#[derive(Clone, Debug)]
pub struct ScriptedBoard {
    script: Rc<Scripted>,
    path: Vec<usize>,
    symbols: (char, char),
    dimensions: (usize, usize),
}

impl ScriptedBoard {
    /// Start at the top of `script`, with symbols 'A' and 'B' on an 8x8 grid.
    pub fn new(script: Scripted) -> Self {
        Self {
            script: Rc::new(script),
            path: Vec::new(),
            symbols: ('A', 'B'),
            dimensions: (8, 8),
        }
    }

    pub fn with_symbols(self, first: char, second: char) -> Self {
        Self {
            symbols: (first, second),
            ..self
        }
    }

    pub fn with_dimensions(self, cols: usize, rows: usize) -> Self {
        Self {
            dimensions: (cols, rows),
            ..self
        }
    }

    /// The columns played to reach this position.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    fn current(&self) -> &Scripted {
        let mut node = self.script.as_ref();
        for &col in &self.path {
            node = match node {
                Scripted::Branch(children) => children
                    .iter()
                    .find(|(c, _)| *c == col)
                    .map(|(_, child)| child)
                    .unwrap_or(node),
                Scripted::Leaf(..) => node,
            };
        }
        node
    }
}

impl BoardState for ScriptedBoard {
    type Symbol = char;

    fn num_cols(&self) -> usize {
        self.dimensions.0
    }

    fn num_rows(&self) -> usize {
        self.dimensions.1
    }

    fn symbols(&self) -> (char, char) {
        self.symbols
    }

    fn is_legal_move(&self, col: usize, row: usize, _symbol: char) -> bool {
        match self.current() {
            Scripted::Branch(children) => row == 0 && children.iter().any(|(c, _)| *c == col),
            Scripted::Leaf(..) => false,
        }
    }

    fn play_move(&mut self, col: usize, _row: usize, _symbol: char) {
        self.path.push(col);
    }

    fn count_score(&self, symbol: char) -> Utility {
        match *self.current() {
            Scripted::Leaf(first, _) if symbol == self.symbols.0 => first,
            Scripted::Leaf(_, second) if symbol == self.symbols.1 => second,
            _ => 0,
        }
    }
}

impl fmt::Display for ScriptedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for col in &self.path {
            write!(f, "/{}", col)?;
        }
        Ok(())
    }
}
