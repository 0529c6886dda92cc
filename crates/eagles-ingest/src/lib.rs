//! Game statistics ingestion.
//!
//! This crate finds game statistics CSV files in an input folder and decodes
//! them into typed [`GameRecord`](eagles_model::GameRecord) values.
//!
//! # Features
//!
//! - **Discovery**: List `*.csv` files in a directory in a stable order
//! - **Header Validation**: Reject files that lack any of the required columns
//! - **Strict Decoding**: Every row must supply every field; integer fields
//!   must parse, otherwise the whole read fails
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use eagles_ingest::{list_csv_files, read_game_records};
//!
//! let mut games = Vec::new();
//! for path in list_csv_files(Path::new("input"))? {
//!     games.extend(read_game_records(&path)?);
//! }
//! ```

mod discovery;
mod error;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use records::{GameHeaders, read_game_headers, read_game_records};

// === File Discovery ===
pub use discovery::list_csv_files;
