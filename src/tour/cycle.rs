//! Circular tour structure.
//!
//! # Representation
//!
//! Nodes live in an arena (`Vec<Node>`); each node holds one point and the
//! arena index of its successor. The tour keeps the index of one anchor
//! node (`first`), absent for the empty tour. Following successor links
//! from any node visits every node exactly once before returning to it:
//! the arena always holds a single cycle. Every mutation appends one node
//! and rewrites exactly one successor link, which is how that invariant is
//! preserved without runtime checks.

use std::fmt;

use crate::models::Point;
use crate::render::Canvas;

#[derive(Debug, Clone)]
struct Node {
    point: Point,
    next: usize,
}

/// A closed tour over points in the plane.
///
/// The tour is a mutable circular sequence: it grows one point at a time
/// through [`insert_nearest`](Tour::insert_nearest) or
/// [`insert_smallest`](Tour::insert_smallest), each of which scans the
/// cycle once and splices the new point into it. Insertion order matters —
/// the same points fed in a different order generally produce a different
/// tour.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::Point;
/// use greedy_tour::tour::Tour;
///
/// let mut tour = Tour::new();
/// tour.insert_smallest(Point::new(0.0, 0.0));
/// tour.insert_smallest(Point::new(10.0, 0.0));
/// tour.insert_smallest(Point::new(10.0, 10.0));
/// assert_eq!(tour.len(), 3);
/// assert!(tour.total_distance() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Tour {
    nodes: Vec<Node>,
    first: Option<usize>,
}

impl Tour {
    /// Creates an empty tour.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            first: None,
        }
    }

    /// Creates the fixed 4-cycle `a → b → c → d → a`.
    ///
    /// Bypasses the insertion heuristics entirely, so the resulting shape
    /// is fully determined by the argument order. Intended for tests and
    /// debugging where a known tour is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use greedy_tour::models::Point;
    /// use greedy_tour::tour::Tour;
    ///
    /// let square = Tour::four_point(
    ///     Point::new(100.0, 100.0),
    ///     Point::new(500.0, 100.0),
    ///     Point::new(500.0, 500.0),
    ///     Point::new(100.0, 500.0),
    /// );
    /// assert_eq!(square.len(), 4);
    /// assert!((square.total_distance() - 1600.0).abs() < 1e-10);
    /// ```
    pub fn four_point(a: Point, b: Point, c: Point, d: Point) -> Self {
        let nodes = vec![
            Node { point: a, next: 1 },
            Node { point: b, next: 2 },
            Node { point: c, next: 3 },
            Node { point: d, next: 0 },
        ];
        Self {
            nodes,
            first: Some(0),
        }
    }

    /// Number of points on the tour.
    ///
    /// Equals the number of insertions performed since the tour was empty
    /// (plus four for [`four_point`](Tour::four_point) tours).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour has no points.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Total length of the closed tour.
    ///
    /// Sums the distance from each point to its successor around the full
    /// cycle, so the wraparound edge back to the anchor is included. Zero
    /// for the empty tour, and zero for a single point (its only edge is
    /// the self-loop).
    pub fn total_distance(&self) -> f64 {
        let Some(first) = self.first else {
            return 0.0;
        };
        let mut total = 0.0;
        let mut current = first;
        loop {
            let next = self.nodes[current].next;
            total += self.nodes[current].point.distance_to(&self.nodes[next].point);
            current = next;
            if current == first {
                break;
            }
        }
        total
    }

    /// Iterates over the points in cycle order, starting at the anchor.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tour: self,
            current: self.first,
            remaining: self.nodes.len(),
        }
    }

    /// Returns the points in cycle order, starting at the anchor.
    pub fn points(&self) -> Vec<Point> {
        self.iter().copied().collect()
    }

    /// Draws the tour onto a canvas, one segment per edge.
    ///
    /// Emits every consecutive pair in cycle order, including the
    /// wraparound edge from the last point back to the anchor. No-op on
    /// the empty tour. A single-point tour draws its self-loop as one
    /// degenerate segment.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        let Some(first) = self.first else {
            return;
        };
        let mut current = first;
        loop {
            let next = self.nodes[current].next;
            canvas.draw_segment(self.nodes[current].point, self.nodes[next].point);
            current = next;
            if current == first {
                break;
            }
        }
    }

    /// Inserts `p` next to the nearest point already on the tour.
    ///
    /// Scans the cycle once for the node whose point is closest to `p`
    /// (straight-line distance) and splices `p` in immediately after it.
    /// On an exact tie the earliest node in traversal order from the
    /// anchor wins — the scan keeps only strictly smaller distances, so
    /// the first minimum found is the one used. O(n) per insertion.
    ///
    /// Into an empty tour, `p` becomes the sole point, linked to itself.
    pub fn insert_nearest(&mut self, p: Point) {
        let Some(first) = self.first else {
            self.insert_initial(p);
            return;
        };
        let mut nearest = first;
        let mut nearest_dist = f64::INFINITY;
        let mut current = first;
        loop {
            let d = self.nodes[current].point.distance_to(&p);
            if d < nearest_dist {
                nearest_dist = d;
                nearest = current;
            }
            current = self.nodes[current].next;
            if current == first {
                break;
            }
        }
        self.splice_after(nearest, p);
    }

    /// Inserts `p` into the edge whose replacement lengthens the tour least.
    ///
    /// For each edge (node, successor), the candidate tour length is
    /// `current - removed + added`, where `removed` is the edge's own
    /// length and `added` is the length of the two edges that would
    /// replace it (node → `p` → successor). The edge with the smallest
    /// candidate total wins; on an exact tie the earliest edge in
    /// traversal order from the anchor wins, same as
    /// [`insert_nearest`](Tour::insert_nearest). O(n) per insertion.
    ///
    /// Unlike nearest-neighbor insertion this accounts for the edge being
    /// displaced, not just proximity, and typically yields shorter tours
    /// at the same cost.
    ///
    /// Into an empty tour, `p` becomes the sole point, linked to itself.
    pub fn insert_smallest(&mut self, p: Point) {
        let Some(first) = self.first else {
            self.insert_initial(p);
            return;
        };
        let base = self.total_distance();
        let mut best = first;
        let mut best_total = f64::INFINITY;
        let mut current = first;
        loop {
            let next = self.nodes[current].next;
            let removed = self.nodes[current]
                .point
                .distance_to(&self.nodes[next].point);
            let added = self.nodes[current].point.distance_to(&p)
                + self.nodes[next].point.distance_to(&p);
            let total = base - removed + added;
            if total < best_total {
                best_total = total;
                best = current;
            }
            current = next;
            if current == first {
                break;
            }
        }
        self.splice_after(best, p);
    }

    // First insertion into an empty tour: one self-linked node.
    fn insert_initial(&mut self, p: Point) {
        debug_assert!(self.nodes.is_empty());
        self.nodes.push(Node { point: p, next: 0 });
        self.first = Some(0);
    }

    // Splices `p` in immediately after `position`. Appends one node and
    // rewrites exactly one successor link, keeping the single cycle intact.
    fn splice_after(&mut self, position: usize, p: Point) {
        let index = self.nodes.len();
        let next = self.nodes[position].next;
        self.nodes.push(Node { point: p, next });
        self.nodes[position].next = index;
    }
}

impl Default for Tour {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Tour {
    /// One point per line, in cycle order from the anchor. The empty tour
    /// renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in self.iter() {
            writeln!(f, "{}", point)?;
        }
        Ok(())
    }
}

/// Iterator over a tour's points in cycle order.
///
/// Created by [`Tour::iter`]. Yields each point exactly once, starting at
/// the anchor node.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    tour: &'a Tour,
    current: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<&'a Point> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.current?;
        self.remaining -= 1;
        let node = &self.tour.nodes[index];
        self.current = Some(node.next);
        Some(&node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::render::SegmentBuffer;

    fn square_corners() -> [Point; 4] {
        [
            Point::new(100.0, 100.0),
            Point::new(500.0, 100.0),
            Point::new(500.0, 500.0),
            Point::new(100.0, 500.0),
        ]
    }

    fn square_tour() -> Tour {
        let [a, b, c, d] = square_corners();
        Tour::four_point(a, b, c, d)
    }

    /// Walks successor links from the anchor and asserts the walk returns
    /// to the anchor after exactly `len()` steps, never earlier.
    fn assert_single_cycle(tour: &Tour) {
        let Some(first) = tour.first else {
            assert_eq!(tour.len(), 0);
            return;
        };
        let mut current = first;
        for step in 1..=tour.len() {
            current = tour.nodes[current].next;
            if current == first {
                assert_eq!(step, tour.len(), "walk returned to the anchor early");
                return;
            }
        }
        panic!("walk did not return to the anchor within {} steps", tour.len());
    }

    #[test]
    fn test_empty_tour() {
        let tour = Tour::new();
        assert!(tour.is_empty());
        assert_eq!(tour.len(), 0);
        assert_eq!(tour.total_distance(), 0.0);
        assert_eq!(tour.to_string(), "");
        assert_eq!(tour.iter().count(), 0);
    }

    #[test]
    fn test_four_point_square() {
        let tour = square_tour();
        assert_eq!(tour.len(), 4);
        assert!((tour.total_distance() - 1600.0).abs() < 1e-10);
        assert_eq!(tour.points(), square_corners().to_vec());
    }

    #[test]
    fn test_single_point_tour() {
        let mut tour = Tour::new();
        tour.insert_nearest(Point::new(42.0, 17.0));
        assert_eq!(tour.len(), 1);
        assert_eq!(tour.total_distance(), 0.0);
        assert_single_cycle(&tour);
    }

    #[test]
    fn test_insert_nearest_picks_closest() {
        let mut tour = Tour::new();
        tour.insert_nearest(Point::new(0.0, 0.0));
        tour.insert_nearest(Point::new(10.0, 0.0));
        // (1, 0) is closest to (0, 0): spliced right after it.
        tour.insert_nearest(Point::new(1.0, 0.0));
        assert_eq!(
            tour.points(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(10.0, 0.0),
            ]
        );
        assert_single_cycle(&tour);
    }

    #[test]
    fn test_insert_nearest_tie_breaks_to_earliest() {
        let [a, b, c, d] = square_corners();
        let mut tour = square_tour();
        // The center is equidistant from all four corners; the strict
        // comparison keeps the first minimum, so the splice lands after
        // the anchor. Pinned behavior, not a designed tie-break.
        let center = Point::new(300.0, 300.0);
        tour.insert_nearest(center);
        assert_eq!(tour.points(), vec![a, center, b, c, d]);
        assert_single_cycle(&tour);
    }

    #[test]
    fn test_insert_smallest_picks_cheapest_edge() {
        let [a, b, c, d] = square_corners();
        let mut tour = square_tour();
        // (520, 300) sits just right of the b→c edge: breaking that edge
        // costs far less than breaking any other.
        let p = Point::new(520.0, 300.0);
        tour.insert_smallest(p);
        assert_eq!(tour.points(), vec![a, b, p, c, d]);
        assert_single_cycle(&tour);
    }

    #[test]
    fn test_insert_smallest_tie_breaks_to_earliest() {
        let [a, b, c, d] = square_corners();
        let mut tour = square_tour();
        // All four edges give the same candidate total for the center, so
        // the first edge from the anchor wins. Pinned behavior.
        let center = Point::new(300.0, 300.0);
        tour.insert_smallest(center);
        assert_eq!(tour.points(), vec![a, center, b, c, d]);
        assert_single_cycle(&tour);
    }

    #[test]
    fn test_insert_smallest_into_single_point() {
        let mut tour = Tour::new();
        tour.insert_smallest(Point::new(0.0, 0.0));
        tour.insert_smallest(Point::new(5.0, 0.0));
        assert_eq!(tour.len(), 2);
        // Out and back along the same segment.
        assert!((tour.total_distance() - 10.0).abs() < 1e-10);
        assert_single_cycle(&tour);
    }

    #[test]
    fn test_total_distance_is_pure() {
        let tour = square_tour();
        let first = tour.total_distance();
        let second = tour.total_distance();
        assert_eq!(first, second);
        assert_eq!(tour.len(), 4);
    }

    #[test]
    fn test_insertion_keeps_existing_points() {
        let [a, b, c, d] = square_corners();
        let mut tour = square_tour();
        tour.insert_smallest(Point::new(520.0, 300.0));
        let points = tour.points();
        // Every corner survives the insertion unchanged.
        for corner in [a, b, c, d] {
            assert!(points.contains(&corner));
        }
    }

    #[test]
    fn test_display_one_line_per_point() {
        let tour = square_tour();
        let text = tour.to_string();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().next(), Some("(100, 100)"));
        assert_eq!(text.lines().last(), Some("(100, 500)"));
    }

    #[test]
    fn test_draw_emits_every_edge() {
        let [a, b, c, d] = square_corners();
        let tour = square_tour();
        let mut canvas = SegmentBuffer::new();
        tour.draw(&mut canvas);
        assert_eq!(
            canvas.segments(),
            &[(a, b), (b, c), (c, d), (d, a)],
        );
    }

    #[test]
    fn test_draw_empty_is_noop() {
        let tour = Tour::new();
        let mut canvas = SegmentBuffer::new();
        tour.draw(&mut canvas);
        assert!(canvas.segments().is_empty());
    }

    #[test]
    fn test_iter_matches_display_order() {
        let tour = square_tour();
        let from_iter: Vec<String> = tour.iter().map(|p| p.to_string()).collect();
        let from_display: Vec<String> = tour.to_string().lines().map(String::from).collect();
        assert_eq!(from_iter, from_display);
    }

    fn arb_points() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((0.0f64..1000.0, 0.0f64..1000.0), 0..32)
            .prop_map(|coords| coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }

    proptest! {
        #[test]
        fn prop_len_counts_insertions(points in arb_points()) {
            let mut tour = Tour::new();
            for (i, &p) in points.iter().enumerate() {
                tour.insert_nearest(p);
                prop_assert_eq!(tour.len(), i + 1);
            }
            assert_single_cycle(&tour);
        }

        #[test]
        fn prop_smallest_keeps_cycle_and_grows_length(points in arb_points()) {
            let mut tour = Tour::new();
            let mut previous = 0.0;
            for &p in &points {
                tour.insert_smallest(p);
                assert_single_cycle(&tour);
                let length = tour.total_distance();
                // Splicing into an edge cannot shorten the tour (triangle
                // inequality); allow for float rounding.
                prop_assert!(length + 1e-9 >= previous);
                previous = length;
            }
        }

        #[test]
        fn prop_nearest_never_shrinks_length(points in arb_points()) {
            let mut tour = Tour::new();
            let mut previous = 0.0;
            for &p in &points {
                tour.insert_nearest(p);
                let length = tour.total_distance();
                prop_assert!(length + 1e-9 >= previous);
                previous = length;
            }
        }

        #[test]
        fn prop_text_render_one_line_per_point(points in arb_points()) {
            let mut tour = Tour::new();
            for &p in &points {
                tour.insert_smallest(p);
            }
            prop_assert_eq!(tour.to_string().lines().count(), tour.len());
        }
    }
}
