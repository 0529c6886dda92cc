//! Strict decoding of game statistics rows.

use std::fs::File;
use std::path::Path;

use eagles_model::GameRecord;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

use super::header::GameHeaders;

/// Opens `path` as a headed CSV reader.
pub(super) fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file))
}

/// Converts a `csv` error into an ingest error carrying the file and line.
pub(super) fn csv_error(
    path: &Path,
    error: csv::Error,
    headers: Option<&GameHeaders>,
) -> IngestError {
    let line = error.position().map(csv::Position::line);
    let message = match error.into_kind() {
        csv::ErrorKind::Io(source) => {
            return IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            };
        }
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {expected_len} fields, found {len}"),
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
        csv::ErrorKind::Deserialize { err, .. } => {
            let column = err
                .field()
                .and_then(|index| usize::try_from(index).ok())
                .and_then(|index| headers.and_then(|h| h.name(index)));
            match column {
                Some(column) => format!("field `{column}`: {}", err.kind()),
                None => err.to_string(),
            }
        }
        other => format!("{other:?}"),
    };
    IngestError::Parse {
        path: path.to_path_buf(),
        line,
        message,
    }
}

/// Reads every game record from a CSV file, in file order.
///
/// The first failing row aborts the read; no row is skipped.
pub fn read_game_records(path: &Path) -> Result<Vec<GameRecord>> {
    let mut reader = open_reader(path)?;
    let headers = {
        let record = reader.headers().map_err(|e| csv_error(path, e, None))?;
        GameHeaders::from_record(record, path)?
    };

    let extra = headers.extra_columns();
    if !extra.is_empty() {
        debug!(path = %path.display(), columns = ?extra, "ignoring extra columns");
    }

    let mut games = Vec::new();
    for result in reader.deserialize::<GameRecord>() {
        let game = result.map_err(|e| csv_error(path, e, Some(&headers)))?;
        games.push(game);
    }

    info!(path = %path.display(), game_count = games.len(), "read game records");
    Ok(games)
}
