use std::fmt;

use serde::{Deserialize, Serialize};

use super::roster::Roster;

/// A win-loss record, displayed in the conventional `"W-L"` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

impl TeamRecord {
    pub fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Team-level season aggregates.
///
/// Win-loss splits are entered from the official results; every counting
/// total is recomputed from the roster so the two can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamAggregate {
    pub season_record: TeamRecord,
    pub home_record: TeamRecord,
    pub away_record: TeamRecord,
    pub neutral_record: TeamRecord,
    pub conference_record: TeamRecord,
    pub non_conference_record: TeamRecord,
    /// Sum of roster goals.
    pub total_goals: u32,
    /// Sum of roster assists.
    pub total_assists: u32,
    /// Sum of roster points.
    pub total_points: u32,
    /// Sum of roster shots.
    pub total_shots: u32,
}

impl TeamAggregate {
    /// Build aggregates from the entered records plus roster-derived totals.
    #[allow(clippy::too_many_arguments)]
    pub fn from_roster(
        roster: &Roster,
        season_record: TeamRecord,
        home_record: TeamRecord,
        away_record: TeamRecord,
        neutral_record: TeamRecord,
        conference_record: TeamRecord,
        non_conference_record: TeamRecord,
    ) -> Self {
        let players = roster.players();
        Self {
            season_record,
            home_record,
            away_record,
            neutral_record,
            conference_record,
            non_conference_record,
            total_goals: players.iter().map(|p| p.goals).sum(),
            total_assists: players.iter().map(|p| p.assists).sum(),
            total_points: players.iter().map(|p| p.points).sum(),
            total_shots: players.iter().map(|p| p.shots).sum(),
        }
    }

    pub fn total_games(&self) -> u32 {
        self.season_record.games()
    }

    /// Team shooting percentage, rounded to 2 decimals. 0.0 with no shots.
    pub fn team_shot_pct(&self) -> f64 {
        if self.total_shots > 0 {
            let pct = self.total_goals as f64 / self.total_shots as f64 * 100.0;
            (pct * 100.0).round() / 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roster::PlayerRow;

    fn make_aggregate(rows: Vec<PlayerRow>) -> TeamAggregate {
        TeamAggregate::from_roster(
            &Roster::new(rows),
            TeamRecord::new(16, 6),
            TeamRecord::new(9, 2),
            TeamRecord::new(5, 2),
            TeamRecord::new(2, 2),
            TeamRecord::new(9, 1),
            TeamRecord::new(7, 5),
        )
    }

    #[test]
    fn test_record_display() {
        assert_eq!(TeamRecord::new(16, 6).to_string(), "16-6");
        assert_eq!(TeamRecord::new(16, 6).games(), 22);
    }

    #[test]
    fn test_totals_derived_from_roster() {
        let agg = make_aggregate(vec![
            PlayerRow::new("A", 1, 10, 5, 15, 20, 10),
            PlayerRow::new("B", 2, 6, 3, 9, 12, 10),
        ]);
        assert_eq!(agg.total_goals, 16);
        assert_eq!(agg.total_assists, 8);
        assert_eq!(agg.total_points, 24);
        assert_eq!(agg.total_shots, 32);
        assert_eq!(agg.total_games(), 22);
        assert_eq!(agg.team_shot_pct(), 50.0);
    }

    #[test]
    fn test_shot_pct_zero_shots() {
        let agg = make_aggregate(vec![PlayerRow::new("A", 1, 0, 0, 0, 0, 0)]);
        assert_eq!(agg.team_shot_pct(), 0.0);
    }
}
