use fixedbitset::FixedBitSet;

use crate::{
    euler::eulerian_circuit,
    graph::{DistanceMatrix, MultiGraph, Node, Point, Tour},
    matching::{add_matching, MatchingAlgorithm},
    mst::prims_tree,
    two_opt::TwoOpt,
    TspError,
};

#[derive(Debug, Clone, Default)]
pub struct ChristofidesOptions {
    pub matching: MatchingAlgorithm,
    /// Run at most this many 2-opt moves on the resulting tour.
    pub two_opt: Option<usize>,
}

/// Computes a tour through `points` with the default [`ChristofidesOptions`].
///
/// A single point yields the tour `[0]` of length zero.
pub fn compute_approximate_tour(points: &[Point]) -> Result<Tour, TspError> {
    let dist = DistanceMatrix::new(points)?;
    if dist.n() == 1 {
        return Ok(Tour::singleton());
    }
    christofides(&dist, &ChristofidesOptions::default())
}

/// Christofides-style approximation: spanning tree, matching on its odd vertices, Eulerian
/// circuit of the union, shortcut to a Hamiltonian cycle starting at vertex `0`.
pub fn christofides(dist: &DistanceMatrix, options: &ChristofidesOptions) -> Result<Tour, TspError> {
    if dist.n() < 2 {
        return Err(TspError::TooFewPoints {
            required: 2,
            actual: dist.n(),
        });
    }
    log::info!(
        "Start computing TSP approximation by Christofides algorithm on {} points.",
        dist.n()
    );

    let (mst, mst_cost) = prims_tree(dist);
    let mut multi_graph = MultiGraph::from_tree(&mst);
    let matching_cost = add_matching(&mut multi_graph, dist, options.matching.matcher())?;

    log::info!("MST value: {}", mst_cost);
    log::info!("Perfect matching value: {}", matching_cost);

    let eulerian_tour = eulerian_circuit(mst.root(), multi_graph);
    let tour = construct_tour(&eulerian_tour, dist);

    log::info!(
        "Finished computing TSP approximation by Christofides algorithm: {}",
        tour.cost()
    );

    if let Some(max_iterations) = options.two_opt {
        log::info!("Start improving TSP approximation by 2-opt");
        Ok(TwoOpt::new(tour, dist).run_for(max_iterations))
    } else {
        Ok(tour)
    }
}

/// Shortcuts an Eulerian circuit into a Hamiltonian cycle.
///
/// Keeps only the first visit of every vertex, rotates the order so that vertex `0` comes first
/// and returns to it at the end. By the triangle inequality the result is no longer than the
/// circuit.
pub fn construct_tour(eulerian_tour: &[Node], dist: &DistanceMatrix) -> Tour {
    assert_eq!(eulerian_tour.first(), eulerian_tour.last());
    let n = dist.n();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut tour: Vec<Node> = Vec::with_capacity(n + 1);

    for &node in eulerian_tour {
        if !visited.put(node.id()) {
            tour.push(node);
        }
    }
    assert_eq!(tour.len(), n, "Eulerian circuit misses vertices");

    if let Some(start) = tour.iter().position(|n| n.id() == 0) {
        tour.rotate_left(start);
    }
    tour.push(tour[0]);

    Tour::with_cost_from(tour, dist)
}
