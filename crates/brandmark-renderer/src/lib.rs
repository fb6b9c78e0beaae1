//! # Brandmark Renderer
//!
//! Draws the brand logo onto a supersampled raster canvas and shrinks it to
//! the requested icon size with a Lanczos filter.
//!
//! Composition is written against the [`brandmark_core::Canvas`] trait, so
//! the same code drives the pixel backend and the recording
//! [`brandmark_core::DisplayList`] used in tests.

pub mod logo;
pub mod raster;
pub mod viewport;

pub use logo::{compose, LogoStyle};
pub use raster::{RasterCanvas, RenderError};
pub use viewport::Viewport;

use image::RgbaImage;

/// Render the logo at `size`×`size` pixels using the brand style.
pub fn render_logo(size: u32) -> Result<RgbaImage, RenderError> {
    render_logo_with(&LogoStyle::default(), size)
}

/// Render the logo at `size`×`size` pixels using `style`.
pub fn render_logo_with(style: &LogoStyle, size: u32) -> Result<RgbaImage, RenderError> {
    if size == 0 {
        return Err(RenderError::EmptySize);
    }

    let extent = style
        .canvas_extent(size)
        .ok_or(RenderError::CanvasAllocation { size })?;
    let mut canvas = RasterCanvas::new(extent)?;
    compose(&mut canvas, style);

    log::debug!("Downsampling {}px canvas to {}px", extent, size);
    canvas.downsample(size)
}
