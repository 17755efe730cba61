//! # Ground Truth
//!
//! The known-correct answer set, computed once from the roster and team
//! aggregate at startup. The value is immutable after construction and safe
//! to share across concurrent readers (wrap in `Arc` to share).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::error::{Result, ValidatorError};
use crate::models::{Roster, TeamAggregate, TeamRecord};

/// A player name paired with a counting stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: u32,
}

/// One line of the shooting table: a player and their shooting percentage
/// rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShooterLine {
    pub name: String,
    pub shooting_pct: f64,
}

/// Reference facts derived deterministically from the statistics table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundTruth {
    pub season_record: TeamRecord,
    pub total_games: u32,
    pub top_scorer: NamedCount,
    pub top_assists: NamedCount,
    pub top_points: NamedCount,
    pub total_goals: u32,
    pub total_assists: u32,
    pub total_points: u32,
    /// Best shooting percentage among players with qualifying shot volume.
    /// `None` when no player qualifies.
    pub best_shooter: Option<ShooterLine>,
    /// Players with at least the active-scorer goal minimum.
    pub active_scorers: u32,
    /// Top 3 goal scorers (descending goals, ties by roster order) with
    /// shooting percentages rounded to one decimal.
    pub top3_shooting: Vec<ShooterLine>,
    /// Players at or above the offensive-depth goal threshold.
    pub depth_count: u32,
    /// Full roster name list, kept for rubric name matching.
    pub player_names: Vec<String>,
}

/// Round to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

impl GroundTruth {
    /// Compute the fact set. Fails only on an empty roster; every other
    /// input produces a complete, possibly degenerate, answer set.
    pub fn compute(
        roster: &Roster,
        team: &TeamAggregate,
        config: &ValidationConfig,
    ) -> Result<Self> {
        let players = roster.players();
        if players.is_empty() {
            return Err(ValidatorError::EmptyRoster);
        }

        // max_by_key returns the last maximum; iterate in reverse so ties
        // resolve to the earliest roster row, matching top_scorers()
        let top_scorer_row = players
            .iter()
            .rev()
            .max_by_key(|p| p.goals)
            .ok_or(ValidatorError::EmptyRoster)?;
        let top_assists_row = players
            .iter()
            .rev()
            .max_by_key(|p| p.assists)
            .ok_or(ValidatorError::EmptyRoster)?;
        let top_points_row = players
            .iter()
            .rev()
            .max_by_key(|p| p.points)
            .ok_or(ValidatorError::EmptyRoster)?;

        let best_shooter = players
            .iter()
            .rev()
            .filter(|p| p.shots >= config.qualified_shooter_min_shots)
            .max_by(|a, b| {
                a.shooting_pct()
                    .partial_cmp(&b.shooting_pct())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|p| ShooterLine {
                name: p.name.clone(),
                shooting_pct: round1(p.shooting_pct()),
            });

        let top3_shooting = roster
            .top_scorers(3)
            .into_iter()
            .map(|p| ShooterLine {
                name: p.name.clone(),
                shooting_pct: round1(p.shooting_pct()),
            })
            .collect();

        let truth = Self {
            season_record: team.season_record,
            total_games: team.total_games(),
            top_scorer: NamedCount {
                name: top_scorer_row.name.clone(),
                count: top_scorer_row.goals,
            },
            top_assists: NamedCount {
                name: top_assists_row.name.clone(),
                count: top_assists_row.assists,
            },
            top_points: NamedCount {
                name: top_points_row.name.clone(),
                count: top_points_row.points,
            },
            total_goals: team.total_goals,
            total_assists: team.total_assists,
            total_points: team.total_points,
            best_shooter,
            active_scorers: roster.count_with_goals_at_least(config.active_scorer_min_goals),
            top3_shooting,
            depth_count: roster.count_with_goals_at_least(config.depth_goal_threshold),
            player_names: players.iter().map(|p| p.name.clone()).collect(),
        };

        debug!(
            "ground truth computed: top scorer {} ({} goals), {} roster names",
            truth.top_scorer.name,
            truth.top_scorer.count,
            truth.player_names.len()
        );

        Ok(truth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reference_dataset;
    use crate::models::PlayerRow;

    fn reference_truth() -> GroundTruth {
        let (roster, team) = reference_dataset();
        GroundTruth::compute(&roster, &team, &ValidationConfig::default()).unwrap()
    }

    #[test]
    fn test_top_performers() {
        let truth = reference_truth();
        assert_eq!(truth.top_scorer.name, "Meaghan Tyrrell");
        assert_eq!(truth.top_scorer.count, 70);
        assert_eq!(truth.top_assists.name, "Emma Ward");
        assert_eq!(truth.top_assists.count, 37);
        assert_eq!(truth.top_points.name, "Meaghan Tyrrell");
        assert_eq!(truth.top_points.count, 102);
    }

    #[test]
    fn test_team_facts() {
        let truth = reference_truth();
        assert_eq!(truth.season_record.to_string(), "16-6");
        assert_eq!(truth.total_games, 22);
        assert_eq!(truth.total_goals, 319);
        assert_eq!(truth.total_assists, 167);
        assert_eq!(truth.total_points, 486);
    }

    #[test]
    fn test_top3_shooting_table() {
        let truth = reference_truth();
        let table: Vec<(&str, f64)> = truth
            .top3_shooting
            .iter()
            .map(|l| (l.name.as_str(), l.shooting_pct))
            .collect();
        assert_eq!(
            table,
            vec![
                ("Meaghan Tyrrell", 60.9),
                ("Olivia Adamson", 53.2),
                ("Emma Ward", 48.9),
            ]
        );
    }

    #[test]
    fn test_qualified_best_shooter() {
        // Kendall Rose shot 8-of-11; highest pct but only qualifies because
        // 11 shots clears the default minimum of 10
        let truth = reference_truth();
        let best = truth.best_shooter.unwrap();
        assert_eq!(best.name, "Kendall Rose");
        assert_eq!(best.shooting_pct, 72.7);
    }

    #[test]
    fn test_depth_and_active_counts() {
        let truth = reference_truth();
        assert_eq!(truth.depth_count, 9);
        assert_eq!(truth.active_scorers, 11);
    }

    #[test]
    fn test_no_qualified_shooter() {
        let roster = Roster::new(vec![PlayerRow::new("Solo", 1, 3, 0, 3, 5, 2)]);
        let team = crate::data::reference_team(&roster);
        let truth = GroundTruth::compute(&roster, &team, &ValidationConfig::default()).unwrap();
        assert!(truth.best_shooter.is_none());
    }

    #[test]
    fn test_empty_roster_rejected() {
        let roster = Roster::default();
        let team = crate::data::reference_team(&roster);
        let err = GroundTruth::compute(&roster, &team, &ValidationConfig::default());
        assert!(matches!(err, Err(ValidatorError::EmptyRoster)));
    }
}
