//! Data model for season analytics.
//!
//! [`GameRecord`] is the typed form of one input row. [`SeasonSummary`] is the
//! fixed-shape report derived from a set of records and serialized as JSON.

pub mod game;
pub mod summary;

pub use game::{GameRecord, GameResult, Venue};
pub use summary::{
    HomeAwaySplit, OffenseStats, RecordSummary, ScoringStats, SeasonSummary, TurnoverStats,
};

/// Column names of the game statistics CSV, in file order.
pub const GAME_COLUMNS: [&str; 10] = [
    "game_id",
    "date",
    "opponent",
    "home_away",
    "points_scored",
    "points_allowed",
    "rushing_yards",
    "passing_yards",
    "turnovers",
    "result",
];
