use ndarray::Array2;

use crate::{Cost, TspError};

use super::{Node, Point};

/// Pairwise Euclidean distances between all input points.
///
/// The matrix is square, symmetric and has a zero diagonal. It is built once and only read
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    dist: Array2<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix, rejecting empty input, non-finite coordinates and distances that
    /// overflow `f64`.
    pub fn new(points: &[Point]) -> Result<Self, TspError> {
        if points.is_empty() {
            return Err(TspError::EmptyInput);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(TspError::NonFiniteCoordinate { index });
        }
        Self::from_points(points)
    }

    fn from_points(points: &[Point]) -> Result<Self, TspError> {
        let n = points.len();
        let mut dist = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance(&points[j]);
                if !d.is_finite() {
                    return Err(TspError::DistanceOverflow { i, j });
                }
                dist[[i, j]] = d;
                dist[[j, i]] = d;
            }
        }
        Ok(Self { dist })
    }

    pub fn n(&self) -> usize {
        self.dist.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.dist[[i, j]]
    }

    pub fn cost(&self, n1: Node, n2: Node) -> Cost {
        Cost::new(self.get(n1.id(), n2.id()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.n()).map(Node::new)
    }
}

#[cfg(test)]
mod test_distance {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_symmetric_zero_diagonal() {
        let d = DistanceMatrix::new(&square()).unwrap();
        assert_eq!(d.n(), 4);
        for i in 0..4 {
            assert_eq!(d.get(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(d.get(i, j), d.get(j, i));
            }
        }
        assert_relative_eq!(d.get(0, 1), 1.0);
        assert_relative_eq!(d.get(0, 2), 2f64.sqrt());
        assert_eq!(d.cost(1.into(), 3.into()), Cost::new(d.get(1, 3)));
    }

    #[test]
    fn test_empty() {
        assert_eq!(DistanceMatrix::new(&[]), Err(TspError::EmptyInput));
    }

    #[test]
    fn test_non_finite() {
        let points = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        assert_eq!(
            DistanceMatrix::new(&points),
            Err(TspError::NonFiniteCoordinate { index: 1 })
        );
    }

    #[test]
    fn test_distance_overflow() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1e308, 0.0),
            Point::new(-1e308, 0.0),
        ];
        assert_eq!(
            DistanceMatrix::new(&points),
            Err(TspError::DistanceOverflow { i: 1, j: 2 })
        );
    }

    #[test]
    fn test_singleton() {
        let d = DistanceMatrix::new(&[Point::new(2.0, 3.0)]).unwrap();
        assert_eq!(d.n(), 1);
        assert_eq!(d.get(0, 0), 0.0);
    }
}
