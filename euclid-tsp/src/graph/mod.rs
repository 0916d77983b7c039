mod distance;
mod multi_graph;
mod node;
mod point;
mod tour;
mod tree;

pub use distance::DistanceMatrix;
pub use multi_graph::MultiGraph;
pub use node::Node;
pub use point::Point;
pub use tour::{tour_length, Tour};
pub use tree::SpanningTree;
