use crate::{
    graph::{tour_length, DistanceMatrix, Node, Tour},
    Cost,
};

/// Improvements smaller than this are treated as rounding noise.
const MIN_IMPROVEMENT: f64 = 1e-10;

/// First-improvement 2-opt local search on a closed tour.
///
/// The start vertex stays fixed at both ends. Candidate moves are scanned in index order, so
/// the result only depends on the input tour.
pub struct TwoOpt<'b> {
    current_tour: Vec<Node>,
    current_cost: Cost,
    start_cost: Cost,
    iteration: usize,
    dist: &'b DistanceMatrix,
}

impl<'b> TwoOpt<'b> {
    pub fn new(start_tour: Tour, dist: &'b DistanceMatrix) -> Self {
        TwoOpt {
            current_cost: start_tour.cost(),
            start_cost: start_tour.cost(),
            current_tour: start_tour.into_iter().collect(),
            iteration: 0,
            dist,
        }
    }

    pub fn current_tour(&self) -> Tour {
        Tour::new(self.current_tour.clone(), self.current_cost)
    }

    /// Applies improving moves until none is left or `max_iterations` moves were made.
    pub fn run_for(&mut self, max_iterations: usize) -> Tour {
        log::info!("Starting 2-OPT. Initial tour cost: {}", self.current_cost);
        self.iteration = 0;
        let len = self.current_tour.len();

        'iter: while self.iteration < max_iterations {
            self.iteration += 1;
            log::trace!(
                "Iteration {}/{}: {}",
                self.iteration,
                max_iterations,
                self.current_cost
            );

            // positions 0 and len - 1 hold the start vertex
            for i in 1..len.saturating_sub(2) {
                for k in i + 2..len {
                    if self.gain(i, k) > MIN_IMPROVEMENT {
                        two_opt_swap(&mut self.current_tour, i, k);
                        self.current_cost = tour_length(&self.current_tour, self.dist);
                        continue 'iter;
                    }
                }
            }
            log::info!("Stopping 2-OPT early: No improvement could be made.");
            break 'iter;
        }
        log::info!(
            "2-OPT results after {} iterations: {} -> {}",
            self.iteration,
            self.start_cost,
            self.current_cost
        );
        self.current_tour()
    }

    /// Length saved by reversing `nodes[i..k]`.
    fn gain(&self, i: usize, k: usize) -> f64 {
        let nodes = &self.current_tour;
        let (a, b) = (nodes[i - 1].id(), nodes[i].id());
        let (c, e) = (nodes[k - 1].id(), nodes[k].id());
        let d = |x: usize, y: usize| self.dist.get(x, y);
        d(a, b) + d(c, e) - d(a, c) - d(b, e)
    }
}

fn two_opt_swap(nodes: &mut [Node], i: usize, k: usize) {
    let (_, second) = nodes.split_at_mut(i);
    let (middle, _) = second.split_at_mut(k - i);
    middle.reverse();
}

#[cfg(test)]
mod test_two_opt {
    use super::*;
    use crate::graph::Point;
    use approx::assert_relative_eq;

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
    fn test_two_opt_swap() {
        let mut nodes = to_nodes(&[0, 1, 2, 3, 4, 0]);
        two_opt_swap(&mut nodes, 1, 4);
        assert_eq!(nodes, to_nodes(&[0, 3, 2, 1, 4, 0]));
    }

    #[test]
    fn test_uncross_square() {
        let dist = square();
        let crossing = Tour::with_cost_from(to_nodes(&[0, 2, 1, 3, 0]), &dist);
        assert!(crossing.cost().as_float() > 4.0);

        let tour = TwoOpt::new(crossing, &dist).run_for(10);

        assert_eq!(tour.nodes(), to_nodes(&[0, 1, 2, 3, 0]).as_slice());
        assert_relative_eq!(tour.cost().as_float(), 4.0);
    }

    #[test]
    fn test_optimal_tour_unchanged() {
        let dist = square();
        let optimal = Tour::with_cost_from(to_nodes(&[0, 1, 2, 3, 0]), &dist);

        let tour = TwoOpt::new(optimal.clone(), &dist).run_for(10);

        assert_eq!(tour, optimal);
    }

    #[test]
    fn test_zero_iterations() {
        let dist = square();
        let crossing = Tour::with_cost_from(to_nodes(&[0, 2, 1, 3, 0]), &dist);

        let tour = TwoOpt::new(crossing.clone(), &dist).run_for(0);

        assert_eq!(tour, crossing);
    }

    #[test]
    fn test_tiny_tours() {
        let dist = square();
        let tour = Tour::with_cost_from(to_nodes(&[0, 1, 0]), &dist);
        assert_eq!(TwoOpt::new(tour.clone(), &dist).run_for(5), tour);
    }
}
