//! Cheapest-insertion tour construction.
//!
//! # Algorithm
//!
//! Feeds every input point, in order, through the tour's smallest-increase
//! insertion: for each existing edge, evaluate the tour length that would
//! result from routing the new point through that edge, and splice the
//! point into the edge with the smallest total. This weighs the edge being
//! displaced, not just proximity, so it typically produces shorter tours
//! than nearest-neighbor insertion at the same cost.
//!
//! # Complexity
//!
//! O(n²) where n = number of points (one O(n) edge scan per insertion).
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal
//! on Computing* 6(3), 563-581.

use crate::models::Point;
use crate::tour::Tour;

/// Builds a closed tour over the given points by cheapest insertion.
///
/// Points are inserted in slice order; a different order may still produce
/// a different tour. An empty slice yields an empty tour.
///
/// # Examples
///
/// ```
/// use greedy_tour::constructive::cheapest_insertion;
/// use greedy_tour::models::Point;
///
/// // Square corners fed out of perimeter order.
/// let points = vec![
///     Point::new(100.0, 100.0),
///     Point::new(500.0, 500.0),
///     Point::new(500.0, 100.0),
///     Point::new(100.0, 500.0),
/// ];
/// let tour = cheapest_insertion(&points);
/// assert_eq!(tour.len(), 4);
/// // The heuristic recovers the square's perimeter.
/// assert!((tour.total_distance() - 1600.0).abs() < 1e-10);
/// ```
pub fn cheapest_insertion(points: &[Point]) -> Tour {
    let mut tour = Tour::new();
    for &p in points {
        tour.insert_smallest(p);
    }
    tour
}
