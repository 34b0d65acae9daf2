//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");

const REPORT_PAGE: &str = include_str!("../assets/page-report.css");
const JOBS_PAGE: &str = include_str!("../assets/page-jobs.css");
const QA_PAGE: &str = include_str!("../assets/page-qa.css");

/// Writes all bundled CSS assets to the output assets directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "report.css", &[BASE, REPORT_PAGE])?;
    write_bundled(assets_dir, "jobs.css", &[BASE, JOBS_PAGE])?;
    write_bundled(assets_dir, "qa.css", &[BASE, QA_PAGE])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
