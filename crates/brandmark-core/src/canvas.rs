use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{PixelRect, Point};

/// The drawing capabilities the logo needs from a pixel backend.
///
/// All coordinates are device pixels. Drawing replaces the covered pixels
/// with the given colour, alpha included; nothing is blended.
pub trait Canvas {
    /// Canvas edge length in pixels (canvases are square).
    fn extent(&self) -> u32;
    /// Overwrite every pixel.
    fn fill(&mut self, color: Color);
    /// Straight line of the given width with butt ends.
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64);
    /// Rectangle outline drawn inward from the rectangle's edges.
    fn stroke_rect(&mut self, rect: PixelRect, color: Color, width: f64);
    /// Filled ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: PixelRect, color: Color);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Fill {
        color: Color,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    StrokeRect {
        rect: PixelRect,
        color: Color,
        width: f64,
    },
    FillEllipse {
        bounds: PixelRect,
        color: Color,
    },
}

impl DrawCommand {
    /// Issue this command against another canvas.
    pub fn apply(&self, canvas: &mut dyn Canvas) {
        match *self {
            DrawCommand::Fill { color } => canvas.fill(color),
            DrawCommand::StrokeLine {
                from,
                to,
                color,
                width,
            } => canvas.stroke_line(from, to, color, width),
            DrawCommand::StrokeRect { rect, color, width } => {
                canvas.stroke_rect(rect, color, width)
            }
            DrawCommand::FillEllipse { bounds, color } => canvas.fill_ellipse(bounds, color),
        }
    }
}

/// A canvas that records commands instead of rasterizing them.
///
/// Used to inspect composition output independently of the pixel backend,
/// and to dump a frame as JSON while debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    pub extent: u32,
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(extent: u32) -> Self {
        Self {
            extent,
            commands: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Only the line strokes, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
    }

    /// Replay every command onto `canvas`.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for command in &self.commands {
            command.apply(canvas);
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Canvas for DisplayList {
    fn extent(&self) -> u32 {
        self.extent
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill { color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            width,
        });
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: Color, width: f64) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn fill_ellipse(&mut self, bounds: PixelRect, color: Color) {
        self.commands
            .push(DrawCommand::FillEllipse { bounds, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_list_records_in_order() {
        let mut list = DisplayList::new(64);
        list.fill(Color::rgb(5, 7, 10));
        list.stroke_line(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Color::rgb(255, 0, 0),
            4.0,
        );
        list.fill_ellipse(
            PixelRect::new(0.0, 0.0, 8.0, 8.0),
            Color::rgb(0, 0, 255),
        );

        assert_eq!(list.len(), 3);
        assert_eq!(list.lines().count(), 1);
        assert!(matches!(list.commands[0], DrawCommand::Fill { .. }));
        assert!(matches!(list.commands[2], DrawCommand::FillEllipse { .. }));
    }

    #[test]
    fn test_replay_copies_commands() {
        let mut source = DisplayList::new(32);
        source.fill(Color::rgb(1, 2, 3));
        source.stroke_rect(
            PixelRect::inset_square(32.0, 2.0),
            Color::rgba(255, 255, 255, 64),
            2.0,
        );

        let mut target = DisplayList::new(32);
        source.replay(&mut target);
        assert_eq!(source, target);
    }

    #[test]
    fn test_json_tags_operations() {
        let mut list = DisplayList::new(16);
        list.fill(Color::rgb(5, 7, 10));
        let json = list.to_json().unwrap();
        assert!(json.contains("\"op\":\"fill\""));

        let back: DisplayList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
