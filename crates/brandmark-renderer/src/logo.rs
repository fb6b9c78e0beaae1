use brandmark_core::{
    draw_gradient_path, Canvas, Color, GradientStroke, PixelRect, Point, Polyline,
};
use serde::{Deserialize, Serialize};

use crate::viewport::Viewport;

/// The fixed brand design. Lengths suffixed `_units` are multiplied by the
/// supersampling factor to get device pixels; positions are logical
/// percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoStyle {
    pub supersample: u32,
    pub background: Color,
    pub border_color: Color,
    pub border_units: f64,
    pub stroke_units: f64,
    pub gradient_start: Color,
    pub gradient_end: Color,
    /// The "M" stroke, in logical coordinates.
    pub path: Polyline,
    pub dot_center: Point,
    /// Logical radius of the dot.
    pub dot_radius: f64,
    pub dot_color: Color,
}

impl Default for LogoStyle {
    fn default() -> Self {
        Self {
            supersample: 4,
            background: Color::rgb(5, 7, 10),
            border_color: Color::rgba(255, 255, 255, 64),
            border_units: 2.0,
            stroke_units: 10.0,
            gradient_start: Color::rgb(139, 92, 246),
            gradient_end: Color::rgb(60, 131, 246),
            path: Polyline::new(vec![
                Point::new(20.0, 80.0),
                Point::new(20.0, 25.0),
                Point::new(50.0, 55.0),
                Point::new(80.0, 25.0),
                Point::new(80.0, 80.0),
            ]),
            dot_center: Point::new(50.0, 75.0),
            dot_radius: 5.0,
            dot_color: Color::rgb(139, 92, 246),
        }
    }
}

impl LogoStyle {
    /// Edge length of the working canvas for an output of `size` pixels,
    /// or `None` if it does not fit in a `u32`.
    pub fn canvas_extent(&self, size: u32) -> Option<u32> {
        size.checked_mul(self.supersample)
    }

    /// Border inset and width in device pixels, at least one.
    pub fn border_width(&self) -> f64 {
        (self.border_units * self.supersample as f64).trunc().max(1.0)
    }

    /// Gradient stroke width in device pixels, at least one.
    pub fn stroke_width(&self) -> f64 {
        (self.stroke_units * self.supersample as f64).trunc().max(1.0)
    }

    pub fn gradient(&self) -> GradientStroke {
        GradientStroke {
            start: self.gradient_start,
            end: self.gradient_end,
            width: self.stroke_width(),
        }
    }
}

/// Draw the logo onto `canvas`, sized to the canvas extent.
///
/// Layers, bottom to top: background, border, gradient stroke, dot.
pub fn compose(canvas: &mut dyn Canvas, style: &LogoStyle) {
    let extent = canvas.extent();
    let viewport = Viewport::new(extent);

    canvas.fill(style.background);

    let border = style.border_width();
    canvas.stroke_rect(
        PixelRect::inset_square(extent as f64, border),
        style.border_color,
        border,
    );

    let path = viewport.polyline_to_device(&style.path);
    let lines = draw_gradient_path(canvas, &path, &style.gradient());

    canvas.fill_ellipse(
        viewport.circle_bounds(&style.dot_center, style.dot_radius),
        style.dot_color,
    );

    log::debug!(
        "Composed logo on {}px canvas: border {}px, stroke {}px, {} gradient lines",
        extent,
        border,
        style.stroke_width(),
        lines
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandmark_core::{color_lerp, DisplayList, DrawCommand};

    #[test]
    fn test_default_style_widths() {
        let style = LogoStyle::default();
        assert_eq!(style.canvas_extent(16), Some(64));
        assert_eq!(style.canvas_extent(u32::MAX / 2), None);
        assert_eq!(style.border_width(), 8.0);
        assert_eq!(style.stroke_width(), 40.0);
    }

    #[test]
    fn test_widths_never_below_one_pixel() {
        let style = LogoStyle {
            supersample: 1,
            border_units: 0.2,
            stroke_units: 0.5,
            ..LogoStyle::default()
        };
        assert_eq!(style.border_width(), 1.0);
        assert_eq!(style.stroke_width(), 1.0);
    }

    #[test]
    fn test_compose_layer_order() {
        let style = LogoStyle::default();
        let mut list = DisplayList::new(style.canvas_extent(32).unwrap());
        compose(&mut list, &style);

        let first = list.commands.first().unwrap();
        let second = &list.commands[1];
        let last = list.commands.last().unwrap();
        assert_eq!(
            *first,
            DrawCommand::Fill {
                color: style.background
            }
        );
        assert_eq!(
            *second,
            DrawCommand::StrokeRect {
                rect: PixelRect::new(8.0, 8.0, 120.0, 120.0),
                color: style.border_color,
                width: 8.0,
            }
        );
        match last {
            DrawCommand::FillEllipse { bounds, color } => {
                assert_eq!(*color, style.dot_color);
                assert!((bounds.center().x - 64.0).abs() < 1e-9);
                assert!((bounds.center().y - 96.0).abs() < 1e-9);
                assert!((bounds.width() - 12.8).abs() < 1e-9);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(list.lines().count(), list.len() - 3);
    }

    #[test]
    fn test_compose_gradient_runs_start_to_end() {
        let style = LogoStyle::default();
        let mut list = DisplayList::new(style.canvas_extent(48).unwrap());
        compose(&mut list, &style);

        let lines: Vec<&DrawCommand> = list.lines().collect();
        match lines.first().unwrap() {
            DrawCommand::StrokeLine { from, color, width, .. } => {
                let viewport = Viewport::new(list.extent);
                assert_eq!(*from, viewport.point_to_device(&Point::new(20.0, 80.0)));
                assert_eq!(*color, style.gradient_start);
                assert_eq!(*width, 40.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
        match lines.last().unwrap() {
            DrawCommand::StrokeLine { to, color, .. } => {
                assert!(to.distance_to(&Point::new(153.6, 153.6)) < 1e-9);
                let near_end = color_lerp(style.gradient_start, style.gradient_end, 0.99);
                assert!(color.r <= near_end.r && color.g >= near_end.g);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let style = LogoStyle::default();
        let mut a = DisplayList::new(style.canvas_extent(16).unwrap());
        let mut b = DisplayList::new(style.canvas_extent(16).unwrap());
        compose(&mut a, &style);
        compose(&mut b, &style);
        assert_eq!(a, b);
    }
}
