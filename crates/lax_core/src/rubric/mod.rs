//! # Rubric Scoring
//!
//! Heuristic 3-axis scoring for unstructured strategic text. Each axis is an
//! independent 1-5 integer; there is no memory across calls and no semantic
//! comprehension, only bounded pattern matching.
//!
//! The scorer sits behind the [`StrategicScorer`] trait so alternative
//! rubrics can be substituted and unit-tested without touching the dispatch
//! engine.

use serde::{Deserialize, Serialize};

use crate::ground_truth::GroundTruth;

/// Scores along the three quality axes, each in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricScores {
    pub specificity: u8,
    pub actionability: u8,
    pub plausibility: u8,
}

impl RubricScores {
    /// Whether every axis meets the given minimum.
    pub fn all_at_least(&self, min: u8) -> bool {
        self.specificity >= min && self.actionability >= min && self.plausibility >= min
    }

    pub fn min_axis(&self) -> u8 {
        self.specificity.min(self.actionability).min(self.plausibility)
    }
}

/// Strategy interface for scoring strategic-analysis text.
pub trait StrategicScorer {
    fn score(&self, text: &str, truth: &GroundTruth) -> RubricScores;
}

/// Closed vocabulary of coaching-action phrases.
const ACTION_TERMS: &[&str] = &[
    "focus",
    "improve",
    "increase",
    "reduce",
    "practice",
    "drill",
    "scheme",
    "set play",
    "assign",
    "rotate",
    "substitute",
    "optimize",
    "work on",
    "emphasize",
    "target",
    "adjust",
    "press",
    "zone",
    "man-to-man",
    "transition",
];

/// Default rubric: name mentions and digits drive specificity, the coaching
/// vocabulary drives actionability, and a single contradiction heuristic
/// (claiming a different top scorer) downgrades plausibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicRubric;

/// Whole-token, case-insensitive containment: `needle_lower` must occur in
/// `haystack_lower` with non-alphanumeric characters (or string edges) on
/// both sides. Both inputs must already be lowercased.
fn contains_token(haystack_lower: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return false;
    }
    let mut search_from = 0;
    while let Some(rel) = haystack_lower[search_from..].find(needle_lower) {
        let start = search_from + rel;
        let end = start + needle_lower.len();
        let left_ok = haystack_lower[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let right_ok = haystack_lower[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if left_ok && right_ok {
            return true;
        }
        search_from = end;
    }
    false
}

impl StrategicScorer for HeuristicRubric {
    fn score(&self, text: &str, truth: &GroundTruth) -> RubricScores {
        let text_lower = text.to_lowercase();

        // Specificity: +1 per 2 distinct player names (capped +4), +1 for
        // any digit, clamped to 5
        let mentions = truth
            .player_names
            .iter()
            .filter(|name| contains_token(&text_lower, &name.to_lowercase()))
            .count() as u8;
        let has_digit = text_lower.chars().any(|c| c.is_ascii_digit());
        let specificity =
            (1 + (mentions / 2).min(4) + if has_digit { 1 } else { 0 }).min(5);

        // Actionability: +1 per distinct vocabulary term present
        let term_count = ACTION_TERMS
            .iter()
            .filter(|t| text_lower.contains(*t))
            .count() as u8;
        let actionability = (1 + term_count).clamp(1, 5);

        // Plausibility: contradiction heuristic only, not fact-checking
        let claims_top_scorer =
            text_lower.contains("top scorer") || text_lower.contains("leading scorer");
        let names_actual_top = text_lower.contains(&truth.top_scorer.name.to_lowercase());
        let plausibility = if claims_top_scorer && !names_actual_top {
            2
        } else {
            5
        };

        RubricScores {
            specificity,
            actionability,
            plausibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;
    use crate::data::reference_dataset;

    fn truth() -> GroundTruth {
        let (roster, team) = reference_dataset();
        GroundTruth::compute(&roster, &team, &ValidationConfig::default()).unwrap()
    }

    fn score(text: &str) -> RubricScores {
        HeuristicRubric.score(text, &truth())
    }

    #[test]
    fn test_contains_token_boundaries() {
        assert!(contains_token("rotate emma ward often", "emma ward"));
        assert!(contains_token("(emma ward)", "emma ward"));
        assert!(!contains_token("emma wardlaw", "emma ward"));
        assert!(!contains_token("gemma ward", "emma ward"));
    }

    #[test]
    fn test_vague_text_scores_low() {
        let scores = score("The team should just try harder next year.");
        assert!(scores.specificity <= 2);
        assert_eq!(scores.actionability, 1);
        assert_eq!(scores.plausibility, 5);
        assert!(!scores.all_at_least(3));
    }

    #[test]
    fn test_specific_actionable_text_passes() {
        let scores = score(
            "Focus on transition play and rotate Emma Ward and Sam Swart \
             into the midfield; practice zone looks to add 10 more goals.",
        );
        assert!(scores.specificity >= 3);
        assert!(scores.actionability >= 3);
        assert_eq!(scores.plausibility, 5);
        assert!(scores.all_at_least(3));
    }

    #[test]
    fn test_specificity_caps_at_five() {
        let scores = score(
            "Meaghan Tyrrell, Olivia Adamson, Emma Ward, Sam Swart, \
             Payton Rowley, Maddy Baxter, Savannah Sweitzer, and Emma Madnick \
             combined for 292 goals.",
        );
        assert_eq!(scores.specificity, 5);
    }

    #[test]
    fn test_plausibility_contradiction() {
        let scores = score("The leading scorer Olivia Adamson carried the offense.");
        assert_eq!(scores.plausibility, 2);

        let scores = score("Top scorer Meaghan Tyrrell carried the offense.");
        assert_eq!(scores.plausibility, 5);
    }

    #[test]
    fn test_digit_bumps_specificity() {
        let without = score("A balanced attack wins games.");
        let with = score("A balanced attack wins 16 games.");
        assert_eq!(with.specificity, without.specificity + 1);
    }
}
