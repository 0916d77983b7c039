use crate::Cost;

use super::{DistanceMatrix, Node};

/// A spanning tree stored as parent pointers. The root has no parent, every other vertex has
/// exactly one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    root: Node,
    parent: Vec<Option<Node>>,
}

impl SpanningTree {
    pub fn from_parents(root: Node, parent: Vec<Option<Node>>) -> Self {
        debug_assert!(parent[root.id()].is_none());
        debug_assert_eq!(
            parent.iter().filter(|p| p.is_none()).count(),
            1,
            "only the root may lack a parent"
        );
        Self { root, parent }
    }

    pub fn root(&self) -> Node {
        self.root
    }

    pub fn n(&self) -> usize {
        self.parent.len()
    }

    /// Number of tree edges.
    pub fn m(&self) -> usize {
        self.parent.iter().filter(|p| p.is_some()).count()
    }

    pub fn parent(&self, node: Node) -> Option<Node> {
        self.parent.get(node.id()).copied().flatten()
    }

    /// All `(child, parent)` pairs in increasing child order.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (Node::new(child), p)))
    }

    pub fn total_weight(&self, dist: &DistanceMatrix) -> Cost {
        self.edges().map(|(c, p)| dist.cost(c, p)).sum()
    }
}
