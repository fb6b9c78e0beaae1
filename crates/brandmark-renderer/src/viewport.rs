use brandmark_core::{PixelRect, Point, Polyline};
use serde::{Deserialize, Serialize};

/// Edge length of the logical coordinate space (percent of the canvas).
pub const LOGICAL_EXTENT: f64 = 100.0;

/// Maps the logo's percentage coordinates onto a square device canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas edge length in device pixels.
    pub canvas_extent: f64,
}

impl Viewport {
    pub fn new(canvas_extent: u32) -> Self {
        Self {
            canvas_extent: canvas_extent as f64,
        }
    }

    /// Device pixels per logical unit.
    pub fn zoom(&self) -> f64 {
        self.canvas_extent / LOGICAL_EXTENT
    }

    /// Convert a logical length (or coordinate) to device pixels.
    pub fn to_device(&self, value: f64) -> f64 {
        value * self.canvas_extent / LOGICAL_EXTENT
    }

    /// Convert a device length (or coordinate) to logical units.
    pub fn to_logical(&self, value: f64) -> f64 {
        value * LOGICAL_EXTENT / self.canvas_extent
    }

    pub fn point_to_device(&self, p: &Point) -> Point {
        Point::new(self.to_device(p.x), self.to_device(p.y))
    }

    pub fn polyline_to_device(&self, line: &Polyline) -> Polyline {
        line.map(|p| self.point_to_device(p))
    }

    /// Device bounds of a circle given in logical units.
    pub fn circle_bounds(&self, center: &Point, radius: f64) -> PixelRect {
        PixelRect::around_circle(self.point_to_device(center), self.to_device(radius))
    }
}
