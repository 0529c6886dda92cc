//! Game statistics CSV decoding.

mod header;
mod reader;

pub use header::{GameHeaders, read_game_headers};
pub use reader::read_game_records;
