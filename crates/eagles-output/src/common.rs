//! Shared output helpers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name of the season report inside the output directory.
pub const REPORT_FILE_NAME: &str = "eagles_analytics_report.json";

/// Location of the season report for an output directory.
pub fn report_path(output_dir: &Path) -> PathBuf {
    output_dir.join(REPORT_FILE_NAME)
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}
