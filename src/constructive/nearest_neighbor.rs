//! Nearest-neighbor tour construction.
//!
//! # Algorithm
//!
//! Feeds every input point, in order, through the tour's nearest-neighbor
//! insertion: scan the cycle for the node closest to the new point and
//! splice the point in right after it.
//!
//! # Complexity
//!
//! O(n²) where n = number of points (one O(n) scan per insertion).
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal
//! on Computing* 6(3), 563-581.

use crate::models::Point;
use crate::tour::Tour;

/// Builds a closed tour over the given points by nearest-neighbor insertion.
///
/// Points are inserted in slice order; a different order generally
/// produces a different tour. An empty slice yields an empty tour.
///
/// # Examples
///
/// ```
/// use greedy_tour::constructive::nearest_neighbor;
/// use greedy_tour::models::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ];
/// let tour = nearest_neighbor(&points);
/// assert_eq!(tour.len(), 3);
/// // Out along the line and back: 2 + 2.
/// assert!((tour.total_distance() - 4.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(points: &[Point]) -> Tour {
    let mut tour = Tour::new();
    for &p in points {
        tour.insert_nearest(p);
    }
    tour
}
