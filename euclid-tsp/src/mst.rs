use fixedbitset::FixedBitSet;

use crate::{
    cost::Cost,
    graph::{DistanceMatrix, Node, SpanningTree},
};

/// Computes a minimum spanning tree of the complete graph rooted at vertex `0`.
///
/// The graph is dense, so this is the O(n²) array variant of Prim's algorithm: every round
/// scans all keys from left to right and takes the first minimum, i.e. ties go to the lowest
/// index. Returns the tree together with its total weight.
pub fn prims_tree(dist: &DistanceMatrix) -> (SpanningTree, Cost) {
    let n = dist.n();
    assert!(n > 0, "cannot span an empty graph");

    let mut key = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<Node>> = vec![None; n];
    let mut in_tree = FixedBitSet::with_capacity(n);
    key[0] = 0.0;

    for _ in 0..n {
        let mut u = match (0..n).find(|&v| !in_tree[v]) {
            Some(u) => u,
            None => break,
        };
        for v in (u + 1)..n {
            if !in_tree[v] && key[v] < key[u] {
                u = v;
            }
        }

        in_tree.insert(u);
        for v in 0..n {
            let d = dist.get(u, v);
            if !in_tree[v] && d < key[v] {
                key[v] = d;
                parent[v] = Some(Node::new(u));
            }
        }
    }

    let mst = SpanningTree::from_parents(Node::new(0), parent);
    let total_cost = mst.total_weight(dist);
    log::debug!("MST with {} edges, weight {}", mst.m(), total_cost);
    (mst, total_cost)
}
