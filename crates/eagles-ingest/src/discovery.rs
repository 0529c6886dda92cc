//! Input file discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Lists all CSV files directly inside `dir`.
///
/// Only the lowercase `.csv` extension matches. Returns files sorted by
/// filename. A directory that does not exist yields no files rather than an
/// error.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        warn!(path = %dir.display(), "input directory not found");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "csv");

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(path = %dir.display(), file_count = files.len(), "listed csv files");

    Ok(files)
}
