//! Season report structure.
//!
//! Field order here is the key order of the written JSON document.

use serde::{Deserialize, Serialize};

/// Aggregated report for all games in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub summary: RecordSummary,
    pub scoring: ScoringStats,
    pub offense: OffenseStats,
    pub turnovers: TurnoverStats,
    pub home_away: HomeAwaySplit,
}

/// Overall win/loss record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub total_games: u64,
    pub wins: u64,
    pub losses: u64,
    /// Percentage of games won, one decimal place.
    pub win_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringStats {
    pub total_points_scored: u128,
    pub total_points_allowed: u128,
    pub avg_points_scored: f64,
    pub avg_points_allowed: f64,
    /// Points scored minus points allowed.
    pub point_differential: i128,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffenseStats {
    pub total_rushing_yards: u128,
    pub total_passing_yards: u128,
    pub total_yards: u128,
    pub avg_rushing_yards: f64,
    pub avg_passing_yards: f64,
    pub avg_total_yards: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoverStats {
    pub total_turnovers: u128,
    /// Two decimal places, unlike the other averages.
    pub avg_turnovers_per_game: f64,
}

/// Home and away records rendered as `"{wins}-{losses}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeAwaySplit {
    pub home_record: String,
    pub away_record: String,
}

impl SeasonSummary {
    /// Overall record as `"{wins}-{losses}"`.
    pub fn record(&self) -> String {
        format!("{}-{}", self.summary.wins, self.summary.losses)
    }
}
