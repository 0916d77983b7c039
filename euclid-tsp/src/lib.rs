pub mod cost;
pub mod error;
pub mod euler;
pub mod graph;
pub mod heuristics;
pub mod matching;
pub mod mst;
pub mod tsp;
pub mod two_opt;

pub use cost::Cost;
pub use error::TspError;
pub use graph::{DistanceMatrix, Node, Point, Tour};
pub use matching::MatchingAlgorithm;
pub use tsp::{christofides, compute_approximate_tour, ChristofidesOptions};
