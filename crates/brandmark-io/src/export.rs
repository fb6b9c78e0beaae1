use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use brandmark_renderer::{render_logo_with, LogoStyle, RenderError};
use image::ImageFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icon::{inspect_icon, write_icon_file};

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Image error on {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("Icon source '{0}' is not one of the exported PNGs")]
    MissingIconSource(String),

    #[error("'{name}' is {}x{}, expected {expected}x{expected}", .actual.0, .actual.1)]
    IconSizeMismatch {
        name: String,
        expected: u32,
        actual: (u32, u32),
    },
}

impl ExportError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn image(path: &Path) -> impl FnOnce(image::ImageError) -> Self + '_ {
        move |source| ExportError::Image {
            path: path.to_path_buf(),
            source,
        }
    }
}

// ── Plan ──────────────────────────────────────────────────────────────

/// One PNG written by the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetTarget {
    pub file_name: String,
    /// Edge length in pixels.
    pub size: u32,
}

impl AssetTarget {
    pub fn new(file_name: &str, size: u32) -> Self {
        Self {
            file_name: file_name.to_string(),
            size,
        }
    }
}

/// The multi-resolution icon built from some of the exported PNGs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSpec {
    pub file_name: String,
    /// File names of the PNG targets to embed, smallest first.
    pub sources: Vec<String>,
}

/// Where the branding assets go and which ones are produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPlan {
    pub output_dir: PathBuf,
    pub targets: Vec<AssetTarget>,
    pub icon: IconSpec,
}

impl Default for ExportPlan {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public"),
            targets: vec![
                AssetTarget::new("favicon-16x16.png", 16),
                AssetTarget::new("favicon-32x32.png", 32),
                AssetTarget::new("favicon-48x48.png", 48),
                AssetTarget::new("apple-touch-icon.png", 180),
            ],
            icon: IconSpec {
                file_name: "favicon.ico".to_string(),
                sources: vec![
                    "favicon-16x16.png".to_string(),
                    "favicon-32x32.png".to_string(),
                    "favicon-48x48.png".to_string(),
                ],
            },
        }
    }
}

impl ExportPlan {
    /// The default asset set, written into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn target(&self, file_name: &str) -> Option<&AssetTarget> {
        self.targets.iter().find(|t| t.file_name == file_name)
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// What an export run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    /// Every file written, in write order; the icon is last.
    pub written: Vec<PathBuf>,
    /// Entry dimensions read back from the icon container.
    pub icon_sizes: Vec<(u32, u32)>,
}

// ── Pipeline ──────────────────────────────────────────────────────────

/// Render every target of `plan` with the brand style, then build the icon.
pub fn export(plan: &ExportPlan) -> Result<ExportReport, ExportError> {
    export_with(plan, &LogoStyle::default())
}

/// Render every target of `plan` with `style`, then build the icon.
///
/// Stops at the first failure; files already written are left in place.
pub fn export_with(plan: &ExportPlan, style: &LogoStyle) -> Result<ExportReport, ExportError> {
    fs::create_dir_all(&plan.output_dir).map_err(ExportError::io(&plan.output_dir))?;

    let mut written = Vec::with_capacity(plan.targets.len() + 1);
    for target in &plan.targets {
        written.push(write_png(plan, target, style)?);
    }

    let icon_path = write_favicon(plan)?;
    let icon_sizes = inspect_icon(&icon_path).map_err(ExportError::io(&icon_path))?;
    log::info!(
        "Wrote {} with {} entries: {:?}",
        icon_path.display(),
        icon_sizes.len(),
        icon_sizes
    );
    written.push(icon_path);

    Ok(ExportReport {
        written,
        icon_sizes,
    })
}

fn write_png(
    plan: &ExportPlan,
    target: &AssetTarget,
    style: &LogoStyle,
) -> Result<PathBuf, ExportError> {
    let path = plan.path_of(&target.file_name);
    let img = render_logo_with(style, target.size)?;
    img.save_with_format(&path, ImageFormat::Png)
        .map_err(ExportError::image(&path))?;
    log::info!("Wrote {} ({}x{})", path.display(), target.size, target.size);
    Ok(path)
}

/// Re-open the icon's source PNGs from disk and package them.
fn write_favicon(plan: &ExportPlan) -> Result<PathBuf, ExportError> {
    let mut images = Vec::with_capacity(plan.icon.sources.len());
    for name in &plan.icon.sources {
        let target = plan
            .target(name)
            .ok_or_else(|| ExportError::MissingIconSource(name.clone()))?;
        let path = plan.path_of(name);
        let img = image::open(&path)
            .map_err(ExportError::image(&path))?
            .to_rgba8();
        if img.dimensions() != (target.size, target.size) {
            return Err(ExportError::IconSizeMismatch {
                name: name.clone(),
                expected: target.size,
                actual: img.dimensions(),
            });
        }
        log::debug!("Loaded icon source {}", path.display());
        images.push(img);
    }

    let icon_path = plan.path_of(&plan.icon.file_name);
    write_icon_file(&images, &icon_path).map_err(ExportError::io(&icon_path))?;
    Ok(icon_path)
}
