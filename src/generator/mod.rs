//! Random problem instances.
//!
//! Generates point sets for exercising the construction heuristics.
//! Functions are generic over the caller's RNG, so runs are reproducible
//! with a seeded generator.

use rand::Rng;

use crate::models::Point;

/// Generates `count` points uniformly over `[0, width) × [0, height)`.
///
/// # Panics
///
/// Panics if `width` or `height` is not a positive finite number (the
/// sampling range would be empty).
///
/// # Examples
///
/// ```
/// use greedy_tour::generator::uniform_points;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let points = uniform_points(100, 512.0, 512.0, &mut rng);
/// assert_eq!(points.len(), 100);
/// assert!(points.iter().all(|p| p.x() < 512.0 && p.y() < 512.0));
/// ```
pub fn uniform_points<R: Rng>(count: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
    (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(0.0..width),
                rng.random_range(0.0..height),
            )
        })
        .collect()
}
