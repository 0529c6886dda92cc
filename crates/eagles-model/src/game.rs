//! Per-game statistics as read from the input CSV.

use serde::Deserialize;

/// Where a game was played.
///
/// Only the literal values `home` and `away` are recognized. Anything else is
/// kept verbatim and belongs to neither split.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Venue {
    Home,
    Away,
    Other(String),
}

impl From<String> for Venue {
    fn from(value: String) -> Self {
        match value.as_str() {
            "home" => Self::Home,
            "away" => Self::Away,
            _ => Self::Other(value),
        }
    }
}

impl Venue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
            Self::Other(value) => value,
        }
    }
}

/// Outcome of a game.
///
/// `W` is a win and `L` a loss; other codes are preserved but still count
/// against the season record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum GameResult {
    Win,
    Loss,
    Other(String),
}

impl From<String> for GameResult {
    fn from(value: String) -> Self {
        match value.as_str() {
            "W" => Self::Win,
            "L" => Self::Loss,
            _ => Self::Other(value),
        }
    }
}

impl GameResult {
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Win => "W",
            Self::Loss => "L",
            Self::Other(value) => value,
        }
    }
}

/// One row of the game statistics file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameRecord {
    pub game_id: i64,
    pub date: String,
    pub opponent: String,
    pub home_away: Venue,
    pub points_scored: u64,
    pub points_allowed: u64,
    pub rushing_yards: u64,
    pub passing_yards: u64,
    pub turnovers: u64,
    pub result: GameResult,
}

impl GameRecord {
    pub fn is_win(&self) -> bool {
        self.result.is_win()
    }

    /// Rushing plus passing yards, widened so the sum cannot overflow.
    pub fn total_yards(&self) -> u128 {
        u128::from(self.rushing_yards) + u128::from(self.passing_yards)
    }
}
