//! Pixel backend for [`Canvas`], built on a `tiny_skia` pixmap.
//!
//! Anti-aliasing is off: edges are smoothed by supersampling and the final
//! Lanczos downsample instead. Every draw uses the `Source` blend mode so a
//! translucent colour replaces what is underneath rather than mixing with it.

use brandmark_core::{Canvas, Color, PixelRect, Point};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use thiserror::Error;
use tiny_skia::{
    BlendMode, FillRule, LineCap, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Rect,
    Stroke, Transform,
};

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot render a logo of size 0")]
    EmptySize,

    #[error("Failed to allocate a {size}x{size} canvas")]
    CanvasAllocation { size: u32 },

    #[error("Pixel buffer does not match a {width}x{height} image")]
    BufferSize { width: u32, height: u32 },
}

/// Convert premultiplied RGBA to straight alpha. Resampling overshoot can
/// push a channel above alpha, so channels are clamped to alpha first.
fn demultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    match PremultipliedColorU8::from_rgba(r.min(a), g.min(a), b.min(a), a) {
        Some(p) => {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        }
        None => [0, 0, 0, a],
    }
}

// ── Raster Canvas ─────────────────────────────────────────────────────

pub struct RasterCanvas {
    pixmap: Pixmap,
}

impl RasterCanvas {
    pub fn new(extent: u32) -> Result<Self, RenderError> {
        let pixmap =
            Pixmap::new(extent, extent).ok_or(RenderError::CanvasAllocation { size: extent })?;
        Ok(Self { pixmap })
    }

    /// Colour of one pixel, un-premultiplied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Shrink the canvas to `size`×`size` with a Lanczos filter.
    ///
    /// Resampling runs on premultiplied channels so translucent pixels
    /// contribute in proportion to their alpha; the result is demultiplied.
    pub fn downsample(&self, size: u32) -> Result<RgbaImage, RenderError> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let premultiplied = RgbaImage::from_raw(width, height, self.pixmap.data().to_vec())
            .ok_or(RenderError::BufferSize { width, height })?;

        let mut small = imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);
        for pixel in small.pixels_mut() {
            pixel.0 = demultiply(pixel.0);
        }
        Ok(small)
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = false;
        paint.blend_mode = BlendMode::Source;
        paint
    }

    fn fill_band(&mut self, left: f64, top: f64, right: f64, bottom: f64, paint: &Paint) {
        let band = Rect::from_ltrb(left as f32, top as f32, right as f32, bottom as f32);
        if let Some(rect) = band {
            self.pixmap.fill_rect(rect, paint, Transform::identity(), None);
        }
    }
}

impl Canvas for RasterCanvas {
    fn extent(&self) -> u32 {
        self.pixmap.width()
    }

    fn fill(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            log::trace!("Skipping degenerate line at ({}, {})", from.x, from.y);
            return;
        };

        let stroke = Stroke {
            width: width as f32,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &Self::paint(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: Color, width: f64) {
        // Corners are inclusive pixel coordinates, so the covered area ends
        // one pixel past `right`/`bottom`.
        let (l, t) = (rect.left, rect.top);
        let (r, b) = (rect.right + 1.0, rect.bottom + 1.0);
        let paint = Self::paint(color);
        self.fill_band(l, t, r, t + width, &paint);
        self.fill_band(l, b - width, r, b, &paint);
        self.fill_band(l, t + width, l + width, b - width, &paint);
        self.fill_band(r - width, t + width, r, b - width, &paint);
    }

    fn fill_ellipse(&mut self, bounds: PixelRect, color: Color) {
        let oval = Rect::from_ltrb(
            bounds.left as f32,
            bounds.top as f32,
            bounds.right as f32,
            bounds.bottom as f32,
        )
        .and_then(PathBuilder::from_oval);
        if let Some(path) = oval {
            self.pixmap.fill_path(
                &path,
                &Self::paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }
}
