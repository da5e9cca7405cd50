//! Graphviz output of a search tree, for debugging small searches.

use crate::minimax::backed_up_values;
use crate::state::{BoardState, Utility};
use crate::tree::{NodeId, SearchTree};
use std::borrow::Cow;
use std::fmt::Display;
use std::io;

type Edge = (NodeId, NodeId);

/// A tree paired with its backed-up values.
struct DotTree<'a, B: BoardState> {
    tree: &'a SearchTree<B>,
    values: Vec<Utility>,
}

impl<B: BoardState + Display> SearchTree<B> {
    /// Write the tree in Graphviz dot format. Every node is labelled with its
    /// board, side to move and value; leaves are coloured.
    pub fn render_dot<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        let graph = DotTree {
            tree: self,
            values: backed_up_values(self),
        };
        dot::render(&graph, writer)
    }
}

impl<'a, B: BoardState + Display> dot::Labeller<'a, NodeId, Edge> for DotTree<'a, B> {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("minimax").expect("static graph id is valid")
    }

    fn node_id(&'a self, node: &NodeId) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", node.index())).expect("numbered node ids are valid")
    }

    fn node_label(&'a self, node: &NodeId) -> dot::LabelText<'a> {
        let data = self.tree.node(*node);
        dot::LabelText::label(data.board().to_string()).prefix_line(dot::LabelText::label(
            format!(
                "{:?} to move, value: {}",
                data.side_to_move(),
                self.values[node.index()]
            ),
        ))
    }

    fn node_color(&'a self, node: &NodeId) -> Option<dot::LabelText<'a>> {
        if self.tree.node(*node).is_terminal() {
            Some(dot::LabelText::label("deepskyblue"))
        } else {
            None
        }
    }

    fn edge_label(&'a self, edge: &Edge) -> dot::LabelText<'a> {
        match self.tree.node(edge.1).played_move() {
            Some(mv) => dot::LabelText::label(mv.to_string()),
            None => dot::LabelText::label("pass"),
        }
    }
}

impl<'a, B: BoardState> dot::GraphWalk<'a, NodeId, Edge> for DotTree<'a, B> {
    fn nodes(&'a self) -> dot::Nodes<'a, NodeId> {
        Cow::Owned(self.tree.node_ids().collect())
    }

    fn edges(&'a self) -> dot::Edges<'a, Edge> {
        let edges = self
            .tree
            .node_ids()
            .flat_map(|id| {
                self.tree
                    .node(id)
                    .children()
                    .iter()
                    .map(move |&child| (id, child))
            })
            .collect();
        Cow::Owned(edges)
    }

    fn source(&'a self, edge: &Edge) -> NodeId {
        edge.0
    }

    fn target(&'a self, edge: &Edge) -> NodeId {
        edge.1
    }
}
