//! Season analytics pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Discover and read game statistics CSV files
//! 2. **Aggregate**: Reduce all games into a season summary
//! 3. **Output**: Write the JSON season report
//!
//! A folder without CSV files ends the run after stage 1 without writing
//! anything.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use eagles_analytics::calculate_season_summary;
use eagles_ingest::{list_csv_files, read_game_records};
use eagles_model::{GameRecord, SeasonSummary};
use eagles_output::{report_path, write_season_report};

/// Outcome of a full pipeline run.
#[derive(Debug)]
pub struct AnalyticsRun {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// CSV files read, in processing order.
    pub source_files: Vec<PathBuf>,
    pub game_count: usize,
    /// `None` when no games were read.
    pub summary: Option<SeasonSummary>,
    /// `None` when no report was written.
    pub report_path: Option<PathBuf>,
}

impl AnalyticsRun {
    /// True when the input folder held no CSV files and nothing was written.
    pub fn is_noop(&self) -> bool {
        self.source_files.is_empty()
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug, Default)]
pub struct IngestResult {
    /// CSV files found in the input folder.
    pub files: Vec<PathBuf>,
    /// Games from every file, concatenated in file order.
    pub games: Vec<GameRecord>,
}

/// Discover and read every CSV file in `input_dir`.
///
/// The first unreadable or malformed file aborts the stage.
pub fn ingest(input_dir: &Path) -> Result<IngestResult> {
    let files = list_csv_files(input_dir).context("list csv files")?;
    let mut games = Vec::new();
    for path in &files {
        debug!(path = %path.display(), "reading game statistics");
        let records = read_game_records(path)?;
        games.extend(records);
    }
    Ok(IngestResult { files, games })
}

// ============================================================================
// Stage 2: Aggregate
// ============================================================================

/// Reduce all games into a season summary.
pub fn aggregate(games: &[GameRecord]) -> Option<SeasonSummary> {
    calculate_season_summary(games)
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Write the season report into `output_dir` and return its path.
pub fn output(summary: Option<&SeasonSummary>, output_dir: &Path) -> Result<PathBuf> {
    let path = report_path(output_dir);
    write_season_report(summary, &path)?;
    Ok(path)
}

/// Run all stages for one input folder.
pub fn run_analytics(input_dir: &Path, output_dir: &Path) -> Result<AnalyticsRun> {
    let ingest_span = info_span!("ingest", input_dir = %input_dir.display());
    let ingest_start = Instant::now();
    let IngestResult { files, games } = ingest_span.in_scope(|| ingest(input_dir))?;
    info!(
        file_count = files.len(),
        game_count = games.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    if files.is_empty() {
        info!(input_dir = %input_dir.display(), "no CSV files found");
        return Ok(AnalyticsRun {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            source_files: files,
            game_count: 0,
            summary: None,
            report_path: None,
        });
    }

    let summary = info_span!("aggregate", game_count = games.len()).in_scope(|| aggregate(&games));

    let output_span = info_span!("output", output_dir = %output_dir.display());
    let output_start = Instant::now();
    let path = output_span.in_scope(|| output(summary.as_ref(), output_dir))?;
    info!(
        path = %path.display(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    Ok(AnalyticsRun {
        input_dir: input_dir.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        source_files: files,
        game_count: games.len(),
        summary,
        report_path: Some(path),
    })
}
