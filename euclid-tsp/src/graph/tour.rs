use fixedbitset::FixedBitSet;
use serde::Serialize;

use crate::Cost;

use super::{DistanceMatrix, Node};

/// A closed tour. Note that we assume that `nodes.first() == nodes.last()`, and that no node
/// except the start node appears more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tour {
    nodes: Vec<Node>,
    cost: Cost,
}

impl IntoIterator for Tour {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl Tour {
    pub fn new(nodes: Vec<Node>, cost: Cost) -> Self {
        assert_eq!(nodes.first(), nodes.last());
        debug_assert!(visits_once(&nodes));
        Self { nodes, cost }
    }

    /// The tour of a single city: `[0]` with length zero.
    pub fn singleton() -> Self {
        Self::new(vec![Node::new(0)], Cost::zero())
    }

    pub fn with_cost_from(nodes: Vec<Node>, dist: &DistanceMatrix) -> Self {
        let cost = tour_length(&nodes, dist);
        Self::new(nodes, cost)
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    pub fn first(&self) -> Node {
        self.nodes[0]
    }

    pub fn last(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Node> {
        self.nodes.get(idx).copied()
    }

    /// Checks that this tour visits each of the `n` vertices exactly once and returns to its
    /// start.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if n == 1 {
            return self.nodes == [Node::new(0)];
        }
        self.nodes.len() == n + 1
            && self.first() == self.last()
            && self.nodes.iter().all(|node| node.id() < n)
            && visits_once(&self.nodes)
    }
}

/// Sum of the distances between consecutive nodes.
pub fn tour_length(nodes: &[Node], dist: &DistanceMatrix) -> Cost {
    nodes.windows(2).map(|e| dist.cost(e[0], e[1])).sum()
}

fn visits_once(nodes: &[Node]) -> bool {
    if nodes.len() <= 1 {
        return true;
    }
    let open = &nodes[..nodes.len() - 1];
    let max = open.iter().map(|n| n.id()).max().unwrap_or(0);
    let mut seen = FixedBitSet::with_capacity(max + 1);
    open.iter().all(|n| !seen.put(n.id()))
}

#[cfg(test)]
mod test_tour {
    use super::*;
    use crate::graph::Point;

    fn to_nodes(ids: &[usize]) -> Vec<Node> {
        ids.iter().map(|&n| n.into()).collect()
    }

    fn square() -> DistanceMatrix {
        DistanceMatrix::new(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_with_cost_from() {
        let dist = square();
        let tour = Tour::with_cost_from(to_nodes(&[0, 1, 2, 3, 0]), &dist);
        assert_eq!(tour.cost(), Cost::new(4.0));
        assert_eq!(tour.len(), 5);
        assert!(tour.is_valid_for(4));

        let crossing = Tour::with_cost_from(to_nodes(&[0, 2, 1, 3, 0]), &dist);
        assert!(crossing.cost() > tour.cost());
    }

    #[test]
    fn test_is_valid_for() {
        let dist = square();
        let tour = Tour::with_cost_from(to_nodes(&[0, 1, 2, 0]), &dist);
        assert!(tour.is_valid_for(3));
        assert!(!tour.is_valid_for(4));
        assert!(Tour::singleton().is_valid_for(1));
    }

    #[test]
    fn test_visits_once() {
        assert!(visits_once(&to_nodes(&[0, 1, 2, 0])));
        assert!(!visits_once(&to_nodes(&[0, 1, 1, 0])));
        assert!(visits_once(&to_nodes(&[0])));
    }

    #[test]
    #[should_panic]
    fn test_open_tour() {
        Tour::new(to_nodes(&[0, 1, 2]), Cost::zero());
    }
}
