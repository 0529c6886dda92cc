//! JSON season report.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use eagles_model::SeasonSummary;
use tracing::info;

use crate::common::ensure_parent_dir;

/// Renders the report as pretty JSON with 2-space indentation.
///
/// A missing summary renders as an empty object.
pub fn render_season_report(summary: Option<&SeasonSummary>) -> Result<String> {
    let json = match summary {
        Some(summary) => serde_json::to_string_pretty(summary),
        None => serde_json::to_string_pretty(&serde_json::Map::new()),
    }
    .context("serialize season report")?;
    Ok(json)
}

/// Writes the report to `path`, replacing any existing file.
pub fn write_season_report(summary: Option<&SeasonSummary>, path: &Path) -> Result<()> {
    let json = render_season_report(summary)?;
    ensure_parent_dir(path)?;
    fs::write(path, format!("{json}\n")).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), empty = summary.is_none(), "season report written");
    Ok(())
}
