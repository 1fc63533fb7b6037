//! Rendering seam for tours.
//!
//! The tour draws itself edge by edge against the [`Canvas`] trait and
//! never depends on a concrete output surface.
//!
//! - [`Canvas`] — The drawing surface contract
//! - [`SegmentBuffer`] — Records segments in draw order (tests, inspection)
//! - [`SvgCanvas`] — Serializes segments into an SVG document

mod canvas;
mod svg;

pub use canvas::{Canvas, SegmentBuffer};
pub use self::svg::SvgCanvas;
