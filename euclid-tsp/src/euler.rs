use crate::graph::{MultiGraph, Node};

/// Computes an Eulerian circuit of `graph` starting and ending at `start` (Hierholzer).
///
/// Every vertex must have even degree and all edges must be reachable from `start`. The graph
/// is consumed: each edge is removed from both endpoints as it is traversed. Instead of
/// recursing, the current walk lives on an explicit stack; a vertex without unused edges is
/// popped onto the circuit, which therefore comes out in reverse.
pub fn eulerian_circuit(start: Node, mut graph: MultiGraph) -> Vec<Node> {
    if start.id() >= graph.n() {
        return vec![];
    }
    let num_edges = graph.m();

    let mut circuit: Vec<Node> = Vec::with_capacity(num_edges + 1);
    let mut stack: Vec<Node> = vec![start];

    while let Some(&current) = stack.last() {
        if let Some(next) = graph.pop_edge(current) {
            stack.push(next);
        } else {
            circuit.push(current);
            stack.pop();
        }
    }
    circuit.reverse();

    assert!(
        circuit.len() == num_edges + 1 && circuit.first() == circuit.last(),
        "graph is not Eulerian from {}",
        start
    );
    log::debug!("Eulerian circuit over {} edges", num_edges);
    circuit
}
