//! Pairing of the odd-degree vertices of a spanning tree.
//!
//! Adding a perfect matching on the odd vertices makes every degree even, which is what the
//! Eulerian circuit needs. Christofides' 3/2 bound requires a *minimum-weight* perfect matching;
//! the default [`GreedyMatching`] only approximates it and therefore gives up that bound in
//! exchange for O(k²) time. [`OptimalMatching`] restores it for small odd sets.

use std::str::FromStr;

use crate::{
    cost::Cost,
    graph::{DistanceMatrix, MultiGraph, Node},
    TspError,
};

/// Largest odd vertex set [`OptimalMatching`] accepts. The table has `2^k` entries.
pub const MAX_OPTIMAL_ODD_VERTICES: usize = 20;

/// Computes a perfect matching on a set of vertices of the complete Euclidean graph.
pub trait OddVertexMatcher {
    /// `odd_vertices` is sorted by index and has even length. Returns the matched pairs.
    fn matching(
        &self,
        odd_vertices: &[Node],
        dist: &DistanceMatrix,
    ) -> Result<Vec<(Node, Node)>, TspError>;
}

/// Pairs every unmatched vertex, in index order, with its nearest unmatched successor.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyMatching;

impl OddVertexMatcher for GreedyMatching {
    fn matching(
        &self,
        odd_vertices: &[Node],
        dist: &DistanceMatrix,
    ) -> Result<Vec<(Node, Node)>, TspError> {
        let k = odd_vertices.len();
        let mut used = vec![false; k];
        let mut pairs = Vec::with_capacity(k / 2);

        for i in 0..k {
            if used[i] {
                continue;
            }
            let mut best = f64::INFINITY;
            let mut best_j: Option<usize> = None;
            for j in (i + 1)..k {
                if used[j] {
                    continue;
                }
                let d = dist.get(odd_vertices[i].id(), odd_vertices[j].id());
                // strict: the first (lowest index) candidate wins ties
                if best_j.is_none() || d < best {
                    best = d;
                    best_j = Some(j);
                }
            }
            let j = match best_j {
                Some(j) => j,
                None => panic!("{} has no partner: odd vertex count is odd", odd_vertices[i]),
            };
            used[i] = true;
            used[j] = true;
            pairs.push((odd_vertices[i], odd_vertices[j]));
        }

        Ok(pairs)
    }
}

/// Exact minimum-weight perfect matching by dynamic programming over subsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalMatching;

impl OddVertexMatcher for OptimalMatching {
    fn matching(
        &self,
        odd_vertices: &[Node],
        dist: &DistanceMatrix,
    ) -> Result<Vec<(Node, Node)>, TspError> {
        let k = odd_vertices.len();
        if k > MAX_OPTIMAL_ODD_VERTICES {
            return Err(TspError::TooManyOddVertices {
                max: MAX_OPTIMAL_ODD_VERTICES,
                actual: k,
            });
        }
        assert!(k % 2 == 0, "odd vertex count is odd");
        if k == 0 {
            return Ok(vec![]);
        }

        let full: usize = (1 << k) - 1;
        let mut best = vec![f64::INFINITY; full + 1];
        let mut via: Vec<(u8, u8)> = vec![(0, 0); full + 1];
        best[0] = 0.0;

        // Every reachable mask is extended by pairing its lowest free vertex, so each matching
        // is built in exactly one order.
        for mask in 0..full {
            if !best[mask].is_finite() {
                continue;
            }
            let i = (!mask).trailing_zeros() as usize;
            for j in (i + 1)..k {
                if mask & (1 << j) != 0 {
                    continue;
                }
                let next = mask | (1 << i) | (1 << j);
                let cost =
                    best[mask] + dist.get(odd_vertices[i].id(), odd_vertices[j].id());
                if cost < best[next] {
                    best[next] = cost;
                    via[next] = (i as u8, j as u8);
                }
            }
        }

        let mut pairs = Vec::with_capacity(k / 2);
        let mut mask = full;
        while mask != 0 {
            let (i, j) = via[mask];
            let (a, b) = (odd_vertices[i as usize], odd_vertices[j as usize]);
            pairs.push((a.min(b), a.max(b)));
            mask &= !((1 << i) | (1 << j));
        }
        pairs.sort();
        Ok(pairs)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatchingAlgorithm {
    Greedy,
    Optimal,
}

impl Default for MatchingAlgorithm {
    fn default() -> Self {
        MatchingAlgorithm::Greedy
    }
}

impl FromStr for MatchingAlgorithm {
    type Err = String;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "greedy" => Ok(MatchingAlgorithm::Greedy),
            "optimal" => Ok(MatchingAlgorithm::Optimal),
            other => Err(format!("unknown matching algorithm '{}'", other)),
        }
    }
}

impl MatchingAlgorithm {
    pub fn matcher(&self) -> &'static dyn OddVertexMatcher {
        match self {
            MatchingAlgorithm::Greedy => &GreedyMatching,
            MatchingAlgorithm::Optimal => &OptimalMatching,
        }
    }
}

/// Matches the odd-degree vertices of `graph` and adds the matching edges to it.
///
/// Afterwards every vertex has even degree. Returns the total weight of the added edges.
pub fn add_matching(
    graph: &mut MultiGraph,
    dist: &DistanceMatrix,
    matcher: &dyn OddVertexMatcher,
) -> Result<Cost, TspError> {
    let odd_vertices = graph.odd_vertices();
    assert!(odd_vertices.len() % 2 == 0);

    log::info!(
        "Computing a perfect matching on {} odd vertices.",
        odd_vertices.len()
    );
    let pairs = matcher.matching(&odd_vertices, dist)?;
    assert_eq!(odd_vertices.len(), 2 * pairs.len());

    let mut matching_cost = Cost::zero();
    for (n1, n2) in pairs {
        matching_cost += dist.cost(n1, n2);
        graph.add_edge(n1, n2);
    }
    assert!(graph.is_even(), "odd-degree vertices left after matching");

    Ok(matching_cost)
}
