//! # Embedded Reference Data
//!
//! The 2024 Syracuse women's lacrosse season statistics, compiled into the
//! binary so the engine needs no file I/O to obtain its reference table.
//! Collected from the official team scorebook; row order is scorebook order.

use crate::models::{PlayerRow, Roster, TeamAggregate, TeamRecord};

/// (name, jersey, goals, assists, points, shots, games_played)
const ROSTER_2024: &[(&str, u8, u32, u32, u32, u32, u32)] = &[
    ("Meaghan Tyrrell", 22, 70, 32, 102, 115, 21),
    ("Olivia Adamson", 22, 58, 25, 83, 109, 12),
    ("Emma Ward", 23, 44, 37, 81, 90, 10),
    ("Sam Swart", 2, 29, 18, 47, 53, 19),
    ("Payton Rowley", 19, 23, 15, 38, 55, 15),
    ("Maddy Baxter", 22, 30, 6, 36, 64, 14),
    ("Savannah Sweitzer", 21, 24, 9, 33, 54, 8),
    ("Emma Madnick", 22, 14, 13, 27, 42, 15),
    ("Jody Cerullo", 17, 11, 3, 14, 29, 10),
    ("Grace Britton", 19, 6, 4, 10, 17, 3),
    ("Kendall Rose", 7, 8, 1, 9, 11, 3),
    ("Kaci Benoit", 22, 1, 0, 1, 3, 21),
    ("Sloane Clark", 9, 1, 0, 1, 1, 1),
    ("Katie Goodale", 31, 0, 1, 1, 2, 43),
    ("Mackenzie Rich", 10, 0, 1, 1, 1, 19),
    ("Victoria Reid", 7, 0, 0, 0, 2, 19),
    ("Ryann Banks", 4, 0, 1, 1, 1, 0),
    ("Hallie Simpkins", 22, 0, 1, 1, 0, 26),
    ("McKenzie Oleen", 21, 0, 0, 0, 4, 3),
    ("Ruby Hnatkowiak", 22, 0, 0, 0, 2, 1),
    ("Sydney Pirreca", 6, 0, 0, 0, 1, 10),
    ("Carlie Desimone", 9, 0, 0, 0, 1, 0),
    ("Ally Quirk", 5, 0, 0, 0, 0, 0),
    ("Tate Paulson", 1, 0, 0, 0, 0, 1),
    ("Ryan Johnson", 6, 0, 0, 0, 0, 0),
    ("Georgia Sexton-Stone", 7, 0, 0, 0, 0, 0),
    ("Gwenna Gento", 7, 0, 0, 0, 0, 0),
    ("Ezra Lahan", 7, 0, 0, 0, 0, 1),
    ("Ella Bree", 6, 0, 0, 0, 0, 1),
    ("Talia Waders", 5, 0, 0, 0, 0, 0),
    ("Jenna Marino", 3, 0, 0, 0, 0, 0),
    ("Ana Horvit", 7, 0, 0, 0, 0, 0),
    ("Delaney Swartout", 22, 0, 0, 0, 0, 4),
    ("Daniella Guyette", 7, 0, 0, 0, 0, 0),
];

/// Build the 2024 reference roster.
pub fn reference_roster() -> Roster {
    let players = ROSTER_2024
        .iter()
        .map(|&(name, jersey, goals, assists, points, shots, games)| {
            PlayerRow::new(name, jersey, goals, assists, points, shots, games)
        })
        .collect();
    Roster::new(players)
}

/// Build the 2024 team aggregate. Counting totals are derived from the
/// roster; only the win-loss splits are entered.
pub fn reference_team(roster: &Roster) -> TeamAggregate {
    TeamAggregate::from_roster(
        roster,
        TeamRecord::new(16, 6),
        TeamRecord::new(9, 2),
        TeamRecord::new(5, 2),
        TeamRecord::new(2, 2),
        TeamRecord::new(9, 1),
        TeamRecord::new(7, 5),
    )
}

/// Convenience pair for callers that want both in one call.
pub fn reference_dataset() -> (Roster, TeamAggregate) {
    let roster = reference_roster();
    let team = reference_team(&roster);
    (roster, team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_size() {
        assert_eq!(reference_roster().len(), 34);
    }

    #[test]
    fn test_team_totals_match_scorebook() {
        let (_, team) = reference_dataset();
        assert_eq!(team.total_goals, 319);
        assert_eq!(team.total_assists, 167);
        assert_eq!(team.total_points, 486);
        assert_eq!(team.total_shots, 657);
        assert_eq!(team.total_games(), 22);
        assert_eq!(team.team_shot_pct(), 48.55);
    }

    #[test]
    fn test_season_record() {
        let (_, team) = reference_dataset();
        assert_eq!(team.season_record.to_string(), "16-6");
        assert_eq!(team.conference_record.to_string(), "9-1");
    }
}
