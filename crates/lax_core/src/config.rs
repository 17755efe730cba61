//! # Validation Configuration
//!
//! All matching thresholds in one place. Defaults reproduce the tuned values
//! used for the 2024 season evaluation; callers may override any knob before
//! constructing the engine.

use serde::{Deserialize, Serialize};

/// Tunable thresholds for ground-truth derivation and response matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Absolute tolerance when matching shooting percentages.
    pub percent_tolerance: f64,
    /// Minimum matched entries (of 3) for shooting analysis to pass.
    pub shooting_min_hits: u32,
    /// Minimum score on every rubric axis for strategic analysis to pass.
    pub rubric_pass_score: u8,
    /// Minimum shot volume before a shooting percentage is ranked.
    pub qualified_shooter_min_shots: u32,
    /// Minimum goals for a player to count as an active scorer.
    pub active_scorer_min_goals: u32,
    /// Goal threshold for the offensive-depth player count.
    pub depth_goal_threshold: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            percent_tolerance: 0.5,
            shooting_min_hits: 2,
            rubric_pass_score: 3,
            qualified_shooter_min_shots: 10,
            active_scorer_min_goals: 5,
            depth_goal_threshold: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = ValidationConfig::default();
        assert_eq!(config.percent_tolerance, 0.5);
        assert_eq!(config.shooting_min_hits, 2);
        assert_eq!(config.rubric_pass_score, 3);
        assert_eq!(config.qualified_shooter_min_shots, 10);
    }
}
