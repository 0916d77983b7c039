//! Baseline tours to compare the Christofides approximation against.

use fixedbitset::FixedBitSet;

use crate::{
    cost::Cost,
    graph::{DistanceMatrix, Node, Tour},
    TspError,
};

/// Largest instance [`brute_force`] accepts; it enumerates `(n - 1)!` orders.
pub const MAX_BRUTE_FORCE_POINTS: usize = 12;

/// Starts at vertex `0` and always moves on to the nearest unvisited vertex.
pub fn nearest_neighbor(dist: &DistanceMatrix) -> Tour {
    let n = dist.n();
    if n <= 1 {
        return Tour::singleton();
    }

    let mut visited = FixedBitSet::with_capacity(n);
    let mut nodes: Vec<Node> = Vec::with_capacity(n + 1);

    let mut current = 0;
    visited.insert(current);
    nodes.push(Node::new(current));

    for _ in 1..n {
        let mut best: Option<usize> = None;
        for v in 0..n {
            if visited[v] {
                continue;
            }
            match best {
                Some(b) if dist.get(current, v) >= dist.get(current, b) => {}
                _ => best = Some(v),
            }
        }
        // n - 1 rounds over n vertices, so one is always left
        current = match best {
            Some(v) => v,
            None => break,
        };
        visited.insert(current);
        nodes.push(Node::new(current));
    }
    nodes.push(Node::new(0));

    let tour = Tour::with_cost_from(nodes, dist);
    log::info!("Nearest neighbor tour: {}", tour.cost());
    tour
}

/// Finds an optimal tour by trying every order of the vertices `1..n` behind vertex `0`.
///
/// Orders are visited lexicographically and a partial tour is abandoned as soon as it is no
/// shorter than the best complete one, so among equally long optimal tours the
/// lexicographically first wins.
pub fn brute_force(dist: &DistanceMatrix) -> Result<Tour, TspError> {
    let n = dist.n();
    if n > MAX_BRUTE_FORCE_POINTS {
        return Err(TspError::TooManyPoints {
            max: MAX_BRUTE_FORCE_POINTS,
            actual: n,
        });
    }
    if n <= 1 {
        return Ok(Tour::singleton());
    }

    let mut perm: Vec<usize> = (1..n).collect();
    let mut best_len = f64::INFINITY;
    let mut best_perm = perm.clone();
    let mut permutations: u64 = 0;

    loop {
        permutations += 1;
        let mut len = 0.0;
        let mut prev = 0;
        let mut pruned = false;
        for &curr in &perm {
            len += dist.get(prev, curr);
            prev = curr;
            if len >= best_len {
                pruned = true;
                break;
            }
        }
        if !pruned {
            len += dist.get(prev, 0);
            if len < best_len {
                best_len = len;
                best_perm.copy_from_slice(&perm);
            }
        }

        if !next_permutation(&mut perm) {
            break;
        }
    }
    log::debug!("Brute force checked {} permutations", permutations);

    let mut nodes: Vec<Node> = Vec::with_capacity(n + 1);
    nodes.push(Node::new(0));
    nodes.extend(best_perm.into_iter().map(Node::new));
    nodes.push(Node::new(0));

    let tour = Tour::new(nodes, Cost::new(best_len));
    log::info!("Brute force optimum: {}", tour.cost());
    Ok(tour)
}

/// Rearranges `items` into the next lexicographically greater order. Returns `false` (and
/// leaves `items` sorted ascending) once the last order has been reached.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
