//! # Brandmark Core
//!
//! Backend-independent building blocks of the logo renderer: points and
//! polylines, RGBA colours with linear interpolation, the [`Canvas`]
//! capability trait, and the arc-length gradient stroke.
//!
//! Nothing here touches pixels; the raster backend lives in
//! `brandmark-renderer`.

pub mod canvas;
pub mod color;
pub mod geometry;
pub mod gradient;

pub use canvas::{Canvas, DisplayList, DrawCommand};
pub use color::{color_lerp, lerp, Color};
pub use geometry::{PixelRect, Point, Polyline, Segment};
pub use gradient::{draw_gradient_path, GradientStroke};
