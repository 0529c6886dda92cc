//! Season summary calculation.

use eagles_model::{
    GameRecord, HomeAwaySplit, OffenseStats, RecordSummary, ScoringStats, SeasonSummary,
    TurnoverStats, Venue,
};
use tracing::debug;

use crate::rounding::{average, round_to};

/// Games and wins within one home/away split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitRecord {
    pub games: u64,
    pub wins: u64,
}

impl SplitRecord {
    /// Every game in the split that was not a win.
    pub fn losses(&self) -> u64 {
        self.games - self.wins
    }

    /// Record as `"{wins}-{losses}"`.
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses())
    }

    fn update(&mut self, game: &GameRecord) {
        self.games += 1;
        if game.is_win() {
            self.wins += 1;
        }
    }
}

/// Exact integer totals over a set of games.
///
/// Sums are `u128` so any count of `u64` fields adds up without overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonTotals {
    pub games: u64,
    pub wins: u64,
    pub points_scored: u128,
    pub points_allowed: u128,
    pub rushing_yards: u128,
    pub passing_yards: u128,
    pub turnovers: u128,
    pub home: SplitRecord,
    pub away: SplitRecord,
}

impl SeasonTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one game to the totals.
    pub fn update(&mut self, game: &GameRecord) {
        self.games += 1;
        if game.is_win() {
            self.wins += 1;
        }
        self.points_scored += u128::from(game.points_scored);
        self.points_allowed += u128::from(game.points_allowed);
        self.rushing_yards += u128::from(game.rushing_yards);
        self.passing_yards += u128::from(game.passing_yards);
        self.turnovers += u128::from(game.turnovers);

        match &game.home_away {
            Venue::Home => self.home.update(game),
            Venue::Away => self.away.update(game),
            Venue::Other(value) => {
                debug!(game_id = game.game_id, home_away = %value, "game excluded from home/away splits");
            }
        }
    }

    pub fn losses(&self) -> u64 {
        self.games - self.wins
    }

    pub fn total_yards(&self) -> u128 {
        self.rushing_yards + self.passing_yards
    }

    /// Points scored minus points allowed.
    ///
    /// Sums of `u64` fields stay far below `i128::MAX`; the conversion saturates.
    pub fn point_differential(&self) -> i128 {
        let scored = i128::try_from(self.points_scored).unwrap_or(i128::MAX);
        let allowed = i128::try_from(self.points_allowed).unwrap_or(i128::MAX);
        scored - allowed
    }

    /// Converts the totals into a report, or `None` when no games were counted.
    pub fn to_summary(&self) -> Option<SeasonSummary> {
        if self.games == 0 {
            return None;
        }
        let games = self.games;

        Some(SeasonSummary {
            summary: RecordSummary {
                total_games: games,
                wins: self.wins,
                losses: self.losses(),
                win_percentage: round_to(self.wins as f64 / games as f64 * 100.0, 1),
            },
            scoring: ScoringStats {
                total_points_scored: self.points_scored,
                total_points_allowed: self.points_allowed,
                avg_points_scored: average(self.points_scored, games, 1),
                avg_points_allowed: average(self.points_allowed, games, 1),
                point_differential: self.point_differential(),
            },
            offense: OffenseStats {
                total_rushing_yards: self.rushing_yards,
                total_passing_yards: self.passing_yards,
                total_yards: self.total_yards(),
                avg_rushing_yards: average(self.rushing_yards, games, 1),
                avg_passing_yards: average(self.passing_yards, games, 1),
                avg_total_yards: average(self.total_yards(), games, 1),
            },
            turnovers: TurnoverStats {
                total_turnovers: self.turnovers,
                avg_turnovers_per_game: average(self.turnovers, games, 2),
            },
            home_away: HomeAwaySplit {
                home_record: self.home.record(),
                away_record: self.away.record(),
            },
        })
    }
}

impl<'a> FromIterator<&'a GameRecord> for SeasonTotals {
    fn from_iter<I: IntoIterator<Item = &'a GameRecord>>(iter: I) -> Self {
        let mut totals = Self::new();
        for game in iter {
            totals.update(game);
        }
        totals
    }
}

/// Aggregates a season's games into a summary.
///
/// Returns `None` for an empty slice.
pub fn calculate_season_summary(games: &[GameRecord]) -> Option<SeasonSummary> {
    let totals: SeasonTotals = games.iter().collect();
    debug!(
        game_count = totals.games,
        home_games = totals.home.games,
        away_games = totals.away.games,
        "season totals computed"
    );
    totals.to_summary()
}
