use std::{
    cmp::Ordering,
    fmt,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

use serde::Serialize;

/// The length of an edge or a tour in the Euclidean plane.
///
/// Costs are totally ordered through [`f64::total_cmp`], so they can be used as keys for
/// `min_by_key` and sorting.
#[derive(Copy, Clone, Debug, Default, Serialize)]
pub struct Cost(f64);

impl Cost {
    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn zero() -> Self {
        Cost(0.0)
    }

    pub fn max() -> Self {
        Cost(f64::INFINITY)
    }

    pub fn as_float(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Cost) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Cost) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Cost) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Cost {
    type Output = Self;
    fn add(self, rhs: Cost) -> Self::Output {
        Cost(self.0 + rhs.0)
    }
}

impl Sub for Cost {
    type Output = Self;
    fn sub(self, rhs: Cost) -> Self::Output {
        Cost(self.0 - rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        *self = Cost(self.0 + rhs.0)
    }
}

impl Sum<Cost> for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a Cost> for Cost {
    fn sum<I: Iterator<Item = &'a Cost>>(iter: I) -> Self {
        iter.fold(Cost::zero(), |a, b| a + *b)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost::new(cost)
    }
}
