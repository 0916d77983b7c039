use serde::Serialize;

/// A vertex of the complete graph over the input points: the index of its point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Node(usize);

impl Node {
    pub fn new(id: usize) -> Self {
        Node(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for Node {
    fn from(id: usize) -> Self {
        Node::new(id)
    }
}

#[cfg(test)]
mod test_node {
    use super::*;

    #[test]
    fn test_order_by_index() {
        let mut nodes: Vec<Node> = vec![3.into(), 0.into(), 2.into()];
        nodes.sort();
        assert_eq!(nodes, vec![Node::new(0), Node::new(2), Node::new(3)]);
        assert_eq!(Node::new(7).to_string(), "v7");
    }
}
