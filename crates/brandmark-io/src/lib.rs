//! # Brandmark I/O
//!
//! Writes the favicon set: one PNG per target size, then a multi-resolution
//! `favicon.ico` assembled from the small PNGs as they were written to disk.

pub mod export;
pub mod icon;

pub use export::{
    export, export_with, AssetTarget, ExportError, ExportPlan, ExportReport, IconSpec,
};
pub use icon::{inspect_icon, write_icon, write_icon_file};
