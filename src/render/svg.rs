//! SVG rendering backend.
//!
//! Collects tour segments and serializes them as `<line>` elements using
//! the [`svg`] crate for document construction and attribute formatting.
//! This is a pure backend with no I/O — the finished document is returned
//! as a value and rendered to text on demand.

use svg::node::element::Line;
use svg::Document;

use super::Canvas;
use crate::models::Point;

/// Stroke width applied to every tour segment.
const STROKE_WIDTH: f64 = 1.0;

/// A canvas that renders tour segments into an SVG document.
///
/// Segments accumulate as the tour draws onto the canvas;
/// [`into_document`](SvgCanvas::into_document) then produces the final
/// document with a viewBox matching the canvas dimensions.
///
/// # Examples
///
/// ```
/// use greedy_tour::models::Point;
/// use greedy_tour::render::SvgCanvas;
/// use greedy_tour::tour::Tour;
///
/// let square = Tour::four_point(
///     Point::new(100.0, 100.0),
///     Point::new(500.0, 100.0),
///     Point::new(500.0, 500.0),
///     Point::new(100.0, 500.0),
/// );
/// let mut canvas = SvgCanvas::new(600.0, 600.0);
/// square.draw(&mut canvas);
/// let text = canvas.into_document().to_string();
/// assert!(text.contains("<line"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    segments: Vec<(Point, Point)>,
}

impl SvgCanvas {
    /// Creates a canvas with the given document dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            segments: Vec::new(),
        }
    }

    /// Builds the SVG document from the segments drawn so far.
    pub fn into_document(self) -> Document {
        let mut document = Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", (0.0, 0.0, self.width, self.height));
        for (from, to) in &self.segments {
            let line = Line::new()
                .set("x1", from.x())
                .set("y1", from.y())
                .set("x2", to.x())
                .set("y2", to.y())
                .set("stroke", "black")
                .set("stroke-width", STROKE_WIDTH);
            document = document.add(line);
        }
        document
    }
}

impl Canvas for SvgCanvas {
    fn draw_segment(&mut self, from: Point, to: Point) {
        self.segments.push((from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::Tour;

    fn square_tour() -> Tour {
        Tour::four_point(
            Point::new(100.0, 100.0),
            Point::new(500.0, 100.0),
            Point::new(500.0, 500.0),
            Point::new(100.0, 500.0),
        )
    }

    #[test]
    fn test_one_line_per_edge() {
        let mut canvas = SvgCanvas::new(600.0, 600.0);
        square_tour().draw(&mut canvas);
        let text = canvas.into_document().to_string();
        assert_eq!(text.matches("<line").count(), 4);
    }

    #[test]
    fn test_empty_tour_renders_empty_document() {
        let mut canvas = SvgCanvas::new(600.0, 600.0);
        Tour::new().draw(&mut canvas);
        let text = canvas.into_document().to_string();
        assert!(text.contains("<svg"));
        assert!(!text.contains("<line"));
    }

    #[test]
    fn test_viewbox_matches_dimensions() {
        let canvas = SvgCanvas::new(640.0, 480.0);
        let text = canvas.into_document().to_string();
        assert!(text.contains("viewBox"));
        assert!(text.contains("640"));
        assert!(text.contains("480"));
    }
}
