//! Drawing surface trait and a recording backend.

use crate::models::Point;

/// A surface onto which tour segments are drawn.
///
/// [`Tour::draw`](crate::tour::Tour::draw) calls
/// [`draw_segment`](Canvas::draw_segment) once per tour edge, wraparound
/// included. What a segment becomes — an SVG line, a recorded pair — is up
/// to the implementation; the tour itself never inspects the result.
pub trait Canvas {
    /// Draws the segment between two points.
    fn draw_segment(&mut self, from: Point, to: Point);
}

/// A canvas that records segments instead of rendering them.
///
/// Keeps every segment in draw order, which makes it the natural backend
/// for tests and for inspecting exactly what a tour would draw.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::Point;
/// use greedy_tour::render::{Canvas, SegmentBuffer};
///
/// let mut buffer = SegmentBuffer::new();
/// buffer.draw_segment(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
/// assert_eq!(buffer.segments().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SegmentBuffer {
    segments: Vec<(Point, Point)>,
}

impl SegmentBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns the recorded segments in draw order.
    pub fn segments(&self) -> &[(Point, Point)] {
        &self.segments
    }
}

impl Canvas for SegmentBuffer {
    fn draw_segment(&mut self, from: Point, to: Point) {
        self.segments.push((from, to));
    }
}
