use euclid_tsp::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Endless stream of uniformly random cities in `[0, grid_size)²`. The same seed always
/// produces the same cities.
pub struct RandomPointGenerator {
    grid_size: f64,
    rng: StdRng,
}

impl RandomPointGenerator {
    pub fn new(grid_size: f64, seed: u64) -> Self {
        assert!(grid_size > 0.0, "grid size must be positive");
        RandomPointGenerator {
            grid_size,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomPointGenerator {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.rng.gen_range(0.0..self.grid_size);
        let y = self.rng.gen_range(0.0..self.grid_size);
        Some(Point::new(x, y))
    }
}

#[cfg(test)]
mod test_gen_points {
    use super::*;

    #[test]
    fn test_within_grid() {
        let points: Vec<Point> = RandomPointGenerator::new(50.0, 1).take(200).collect();
        assert_eq!(points.len(), 200);
        assert!(points
            .iter()
            .all(|p| (0.0..50.0).contains(&p.x) && (0.0..50.0).contains(&p.y)));
    }

    #[test]
    fn test_seeded() {
        let a: Vec<Point> = RandomPointGenerator::new(1.0, 99).take(20).collect();
        let b: Vec<Point> = RandomPointGenerator::new(1.0, 99).take(20).collect();
        let c: Vec<Point> = RandomPointGenerator::new(1.0, 100).take(20).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
