use super::{Node, SpanningTree};

/// An undirected multigraph over the vertices `0..n`.
///
/// Every vertex owns an ordered list of neighbor indices. An undirected edge `{u, v}` appears
/// once in the list of `u` and once in the list of `v`; parallel edges are kept as repeated
/// entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiGraph {
    adj_list: Vec<Vec<Node>>,
}

impl MultiGraph {
    pub fn with_nodes(n: usize) -> Self {
        MultiGraph {
            adj_list: vec![vec![]; n],
        }
    }

    /// Turns every parent/child pair of the tree into one undirected edge.
    pub fn from_tree(tree: &SpanningTree) -> Self {
        let mut graph = Self::with_nodes(tree.n());
        for (child, parent) in tree.edges() {
            graph.add_edge(child, parent);
        }
        graph
    }

    pub fn add_edge(&mut self, n1: Node, n2: Node) {
        self.adj_list[n1.id()].push(n2);
        self.adj_list[n2.id()].push(n1);
    }

    /// Removes one copy of the edge `{n1, n2}`. Returns `false` if there is no such edge.
    pub fn remove_edge(&mut self, n1: Node, n2: Node) -> bool {
        let adj_n1 = &mut self.adj_list[n1.id()];
        if let Some(pos) = adj_n1.iter().position(|n| *n == n2) {
            adj_n1.remove(pos);
        } else {
            return false;
        }

        let adj_n2 = &mut self.adj_list[n2.id()];
        if let Some(pos) = adj_n2.iter().position(|n| *n == n1) {
            adj_n2.remove(pos);
        }
        true
    }

    /// Removes and returns the most recently added edge at `node`, together with its reverse
    /// entry at the other endpoint.
    pub fn pop_edge(&mut self, node: Node) -> Option<Node> {
        let other = self.adj_list[node.id()].pop()?;
        let adj_other = &mut self.adj_list[other.id()];
        if let Some(pos) = adj_other.iter().position(|n| *n == node) {
            adj_other.remove(pos);
        }
        Some(other)
    }

    pub fn n(&self) -> usize {
        self.adj_list.len()
    }

    /// Number of undirected edges, counting parallel edges separately.
    pub fn m(&self) -> usize {
        self.adj_list.iter().map(|adj| adj.len()).sum::<usize>() / 2
    }

    pub fn degree(&self, node: Node) -> usize {
        self.adj_list[node.id()].len()
    }

    pub fn neighbors(&self, node: Node) -> &[Node] {
        self.adj_list[node.id()].as_slice()
    }

    pub fn contains_edge(&self, n1: Node, n2: Node) -> bool {
        self.adj_list[n1.id()].contains(&n2)
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.n()).map(Node::new)
    }

    /// All vertices with odd degree, in increasing index order.
    pub fn odd_vertices(&self) -> Vec<Node> {
        self.nodes().filter(|&n| self.degree(n) % 2 == 1).collect()
    }

    pub fn is_even(&self) -> bool {
        self.nodes().all(|n| self.degree(n) % 2 == 0)
    }
}
