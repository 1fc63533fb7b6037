//! # greedy-tour
//!
//! Approximate planar traveling-salesperson tours, built by inserting
//! points one at a time into a closed cycle under one of two greedy
//! rules: nearest-neighbor insertion and cheapest (smallest-increase)
//! insertion.
//!
//! ## Modules
//!
//! - [`models`] — The planar [`Point`](models::Point) value type
//! - [`tour`] — The circular [`Tour`](tour::Tour) structure and its insertion operations
//! - [`constructive`] — Whole-instance construction (nearest-neighbor, cheapest insertion)
//! - [`render`] — Drawing seam: [`Canvas`](render::Canvas) trait with recording and SVG backends
//! - [`generator`] — Uniform random instances
//!
//! ## Example
//!
//! ```
//! use greedy_tour::models::Point;
//! use greedy_tour::tour::Tour;
//!
//! // The corners of a square, as a fixed debug tour.
//! let square = Tour::four_point(
//!     Point::new(100.0, 100.0),
//!     Point::new(500.0, 100.0),
//!     Point::new(500.0, 500.0),
//!     Point::new(100.0, 500.0),
//! );
//! assert_eq!(square.len(), 4);
//! assert!((square.total_distance() - 1600.0).abs() < 1e-10);
//!
//! // The same points again, grown one insertion at a time.
//! let mut tour = Tour::new();
//! for p in square.points() {
//!     tour.insert_smallest(p);
//! }
//! assert_eq!(tour.len(), 4);
//! assert!((tour.total_distance() - 1600.0).abs() < 1e-10);
//! ```

pub mod constructive;
pub mod generator;
pub mod models;
pub mod render;
pub mod tour;
