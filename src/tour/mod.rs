//! The circular tour structure and its insertion operations.
//!
//! A [`Tour`] is a closed cyclic sequence of points — a candidate
//! traveling-salesperson solution. It grows one point at a time through
//! two greedy insertion rules: nearest-neighbor
//! ([`Tour::insert_nearest`]) and smallest-increase
//! ([`Tour::insert_smallest`]).

mod cycle;

pub use cycle::{Iter, Tour};
