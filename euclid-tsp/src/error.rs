use thiserror::Error;

/// Errors returned when the input violates a precondition of a tour algorithm.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// No points were given.
    #[error("point set is empty")]
    EmptyInput,

    /// The algorithm needs at least `required` points.
    #[error("at least {required} points are required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// Two points are too far apart for their distance to fit in an `f64`.
    #[error("distance between points {i} and {j} overflows")]
    DistanceOverflow { i: usize, j: usize },

    /// The exact matching was asked for more odd vertices than it can handle.
    #[error("optimal matching supports at most {max} odd vertices, got {actual}")]
    TooManyOddVertices { max: usize, actual: usize },

    /// The exhaustive search was asked for more points than it can handle.
    #[error("brute force supports at most {max} points, got {actual}")]
    TooManyPoints { max: usize, actual: usize },
}
