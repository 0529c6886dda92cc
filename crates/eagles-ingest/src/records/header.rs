//! Header row validation for game statistics files.

use std::path::Path;

use csv::StringRecord;
use eagles_model::GAME_COLUMNS;

use crate::error::{IngestError, Result};

use super::reader::{csv_error, open_reader};

/// Column names found in the header row of a game statistics file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHeaders {
    /// Column names in file order, exactly as written.
    pub columns: Vec<String>,
}

impl GameHeaders {
    /// Builds headers from a parsed header record.
    ///
    /// Fails when the record is empty or any required game column is absent.
    /// Names are compared exactly, without trimming or case folding.
    pub fn from_record(record: &StringRecord, path: &Path) -> Result<Self> {
        if record.iter().all(str::is_empty) {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }

        let headers = Self {
            columns: record.iter().map(str::to_string).collect(),
        };

        if let Some(column) = headers.missing_columns().next() {
            return Err(IngestError::MissingColumn {
                column,
                path: path.to_path_buf(),
            });
        }

        Ok(headers)
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Name of the column at `index`, if any.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Columns that are not part of the game schema.
    pub fn extra_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|column| !GAME_COLUMNS.contains(column))
            .collect()
    }

    fn missing_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        GAME_COLUMNS
            .into_iter()
            .filter(|required| !self.columns.iter().any(|column| column == required))
    }
}

/// Reads and validates only the header row of `path`.
pub fn read_game_headers(path: &Path) -> Result<GameHeaders> {
    let mut reader = open_reader(path)?;
    let record = reader.headers().map_err(|e| csv_error(path, e, None))?;
    GameHeaders::from_record(record, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_HEADER: &str = "game_id,date,opponent,home_away,points_scored,points_allowed,rushing_yards,passing_yards,turnovers,result";

    fn record(line: &str) -> StringRecord {
        StringRecord::from(line.split(',').collect::<Vec<_>>())
    }

    #[test]
    fn test_accepts_full_header() {
        let headers = GameHeaders::from_record(&record(FULL_HEADER), Path::new("games.csv"))
            .expect("valid header");
        assert_eq!(headers.len(), 10);
        assert!(headers.extra_columns().is_empty());
        assert_eq!(headers.name(8), Some("turnovers"));
    }

    #[test]
    fn test_reports_first_missing_column() {
        let line = FULL_HEADER.replace(",turnovers", "");
        let result = GameHeaders::from_record(&record(&line), Path::new("games.csv"));
        assert!(matches!(
            result,
            Err(IngestError::MissingColumn {
                column: "turnovers",
                ..
            })
        ));
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let line = FULL_HEADER.replace("result", "Result");
        let result = GameHeaders::from_record(&record(&line), Path::new("games.csv"));
        assert!(matches!(
            result,
            Err(IngestError::MissingColumn {
                column: "result",
                ..
            })
        ));
    }

    #[test]
    fn test_lists_extra_columns() {
        let line = format!("{FULL_HEADER},attendance");
        let headers = GameHeaders::from_record(&record(&line), Path::new("games.csv"))
            .expect("valid header");
        assert_eq!(headers.extra_columns(), vec!["attendance"]);
    }

    #[test]
    fn test_empty_record_is_empty_csv() {
        let result = GameHeaders::from_record(&StringRecord::new(), Path::new("games.csv"));
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }
}
