use std::path::{Path, PathBuf};

use brandmark_io::{export, ExportError, ExportPlan, ExportReport};

/// Directory under the project root that receives the branding assets.
pub const PUBLIC_DIR: &str = "public";

// ── App setup ────────────────────────────────────────────────────────

/// Initialise logging. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

/// Workspace root: two levels above this crate's manifest
/// (`<root>/apps/favicon-gen`).
pub fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Write the favicon set into `public/` under the project root, wherever
/// the binary is launched from.
pub fn run() -> Result<ExportReport, ExportError> {
    run_in(&project_root())
}

/// Write the favicon set into `public/` under `root`.
pub fn run_in(root: &Path) -> Result<ExportReport, ExportError> {
    let plan = ExportPlan::new(root.join(PUBLIC_DIR));
    log::info!("Generating favicons into {}", plan.output_dir.display());

    let report = export(&plan)?;
    log::info!("Done: {} files written", report.written.len());
    Ok(report)
}
