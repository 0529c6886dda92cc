//! Season aggregation.
//!
//! Reduces a list of [`GameRecord`](eagles_model::GameRecord) values into a
//! [`SeasonSummary`](eagles_model::SeasonSummary). Sums are kept as exact
//! integers; rounding happens only when averages and percentages are emitted.

pub mod rounding;
pub mod season;

pub use rounding::{average, round_to};
pub use season::{SeasonTotals, SplitRecord, calculate_season_summary};
