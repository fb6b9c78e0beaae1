//! Strokes a polyline whose colour sweeps from one end to the other.
//!
//! The gradient is parameterized by arc length, so a short segment takes a
//! proportionally small share of the colour ramp regardless of how many
//! points define it.

use crate::canvas::Canvas;
use crate::color::{color_lerp, Color};
use crate::geometry::Polyline;

/// Start and end colours of a gradient stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStroke {
    pub start: Color,
    pub end: Color,
    /// Stroke width in device pixels.
    pub width: f64,
}

/// Number of sub-segments used for a segment of `length` device pixels.
///
/// Roughly one per pixel, never fewer than two.
pub fn subdivisions(length: f64) -> usize {
    (length.round() as usize).max(2)
}

/// Draw `path` onto `canvas` as short lines coloured by their position
/// along the path. Returns the number of lines drawn.
///
/// A path of zero total length draws nothing.
pub fn draw_gradient_path(
    canvas: &mut dyn Canvas,
    path: &Polyline,
    stroke: &GradientStroke,
) -> usize {
    let total = path.length();
    if total == 0.0 {
        log::debug!("Skipping gradient path with zero length");
        return 0;
    }

    let mut drawn = 0;
    let mut traveled = 0.0;
    for segment in path.segments() {
        let length = segment.length();
        let steps = subdivisions(length);
        for step in 0..steps {
            let t0 = step as f64 / steps as f64;
            let t1 = (step + 1) as f64 / steps as f64;
            let ratio = (traveled + length * t0) / total;
            let color = color_lerp(stroke.start, stroke.end, ratio);
            canvas.stroke_line(
                segment.start.lerp(&segment.end, t0),
                segment.start.lerp(&segment.end, t1),
                color,
                stroke.width,
            );
            drawn += 1;
        }
        traveled += length;
    }

    log::debug!(
        "Gradient path: {} segments, length {:.1}px, {} lines",
        path.points.len().saturating_sub(1),
        total,
        drawn
    );
    drawn
}
