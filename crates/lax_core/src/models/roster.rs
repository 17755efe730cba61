use serde::{Deserialize, Serialize};

/// One roster row: a player's counting stats for the season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRow {
    pub name: String,
    pub jersey: u8,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
    pub shots: u32,
    pub games_played: u32,
}

impl PlayerRow {
    pub fn new(
        name: impl Into<String>,
        jersey: u8,
        goals: u32,
        assists: u32,
        points: u32,
        shots: u32,
        games_played: u32,
    ) -> Self {
        Self {
            name: name.into(),
            jersey,
            goals,
            assists,
            points,
            shots,
            games_played,
        }
    }

    /// Goals per shot as a percentage. 0.0 when the player took no shots.
    pub fn shooting_pct(&self) -> f64 {
        if self.shots > 0 {
            self.goals as f64 / self.shots as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Goals per game played. 0.0 when no games were played.
    pub fn goals_per_game(&self) -> f64 {
        if self.games_played > 0 {
            self.goals as f64 / self.games_played as f64
        } else {
            0.0
        }
    }

    /// Points per game played. 0.0 when no games were played.
    pub fn points_per_game(&self) -> f64 {
        if self.games_played > 0 {
            self.points as f64 / self.games_played as f64
        } else {
            0.0
        }
    }
}

/// Ordered collection of roster rows. Order is the official scorebook order
/// and is significant: ranking ties break toward the earlier row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<PlayerRow>,
}

impl Roster {
    pub fn new(players: Vec<PlayerRow>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[PlayerRow] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Top `n` goal scorers, descending by goals, ties by roster order.
    pub fn top_scorers(&self, n: usize) -> Vec<&PlayerRow> {
        let mut ranked: Vec<&PlayerRow> = self.players.iter().collect();
        // sort_by is stable, so equal goal counts keep roster order
        ranked.sort_by(|a, b| b.goals.cmp(&a.goals));
        ranked.truncate(n);
        ranked
    }

    /// Number of players with at least `min_goals` goals.
    pub fn count_with_goals_at_least(&self, min_goals: u32) -> u32 {
        self.players.iter().filter(|p| p.goals >= min_goals).count() as u32
    }
}
