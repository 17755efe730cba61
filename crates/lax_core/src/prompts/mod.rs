//! # Test Prompts
//!
//! The canned prompt set handed to the model under test, plus the formatted
//! data-context block each prompt embeds. The engine itself never sees
//! these; they exist so every caller asks the same questions the same way.

use serde::{Deserialize, Serialize};

use crate::ground_truth::GroundTruth;
use crate::models::{Roster, TeamAggregate};
use crate::report::PromptTier;
use crate::validation::QuestionType;

/// One test prompt: a tier, the question type it will be validated as, and
/// the full prompt text including the data context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestPrompt {
    pub tier: PromptTier,
    pub question_type: QuestionType,
    pub prompt: String,
}

/// Number of top scorers listed in the data context.
const CONTEXT_TOP_SCORERS: usize = 10;

/// Format the statistics context handed to the model under test.
///
/// Team totals are always recomputed from the roster so the context can
/// never disagree with the validation ground truth.
pub fn data_context(roster: &Roster, team: &TeamAggregate) -> String {
    let mut context = format!(
        "\nSyracuse Women's Lacrosse 2024 Season Statistics:\n\n\
         TEAM RECORD: {} ({} games)\n\
         - Home: {}\n\
         - Away: {}\n\
         - Conference: {}\n\n\
         TOP PERFORMERS:\n",
        team.season_record,
        team.total_games(),
        team.home_record,
        team.away_record,
        team.conference_record,
    );

    for player in roster.top_scorers(CONTEXT_TOP_SCORERS) {
        // only actual contributors
        if player.goals == 0 {
            continue;
        }
        context.push_str(&format!(
            "- {}: {}G, {}A, {}Pts, {} shots ({:.1}%)\n",
            player.name,
            player.goals,
            player.assists,
            player.points,
            player.shots,
            player.shooting_pct()
        ));
    }

    context.push_str(&format!(
        "\nTEAM TOTALS: {} Goals, {} Assists",
        team.total_goals, team.total_assists
    ));

    context
}

/// Build the full prompt set: 5 basic, 2 intermediate, 1 complex.
pub fn generate_test_prompts(roster: &Roster, team: &TeamAggregate) -> Vec<TestPrompt> {
    let context = data_context(roster, team);
    let with_context =
        |question: &str| format!("{}\n\nQuestion: {}", context, question);

    vec![
        TestPrompt {
            tier: PromptTier::Basic,
            question_type: QuestionType::SeasonRecord,
            prompt: with_context(
                "What was Syracuse Women's Lacrosse team record for the 2024 season?",
            ),
        },
        TestPrompt {
            tier: PromptTier::Basic,
            question_type: QuestionType::TotalGames,
            prompt: with_context("How many total games did Syracuse play in the 2024 season?"),
        },
        TestPrompt {
            tier: PromptTier::Basic,
            question_type: QuestionType::TopScorer,
            prompt: with_context(
                "Who was Syracuse's leading goal scorer in 2024 and how many goals did they score?",
            ),
        },
        TestPrompt {
            tier: PromptTier::Basic,
            question_type: QuestionType::TeamGoals,
            prompt: with_context("How many total goals did the Syracuse team score in 2024?"),
        },
        TestPrompt {
            tier: PromptTier::Basic,
            question_type: QuestionType::TopAssists,
            prompt: with_context("Who led Syracuse in assists in 2024?"),
        },
        TestPrompt {
            tier: PromptTier::Intermediate,
            question_type: QuestionType::ShootingAnalysis,
            prompt: with_context(
                "Calculate the shooting percentage for Syracuse's top 3 goal scorers. \
                 Who was most efficient?",
            ),
        },
        TestPrompt {
            tier: PromptTier::Intermediate,
            question_type: QuestionType::OffensiveBalance,
            prompt: with_context(
                "Analyze Syracuse's offensive balance. How many players scored at least \
                 10 goals? What does this suggest about their offensive depth?",
            ),
        },
        TestPrompt {
            tier: PromptTier::Complex,
            question_type: QuestionType::StrategicAnalysis,
            prompt: format!(
                "{}\n\nAs a coach analyzing Syracuse's 2024 season ({} record), answer:\n\
                 1. What were the team's main offensive strengths?\n\
                 2. If you wanted to improve to 18-4 next season, what specific areas \
                 would you focus on?\n\
                 3. Which player had the biggest impact beyond just goals scored?",
                context, team.season_record
            ),
        },
    ]
}

/// Format the ground-truth answer sheet for a human operator.
pub fn answer_sheet(truth: &GroundTruth) -> String {
    let mut sheet = String::from("=== 2024 VALIDATION ANSWERS ===\n");
    sheet.push_str(&format!("Season Record: {}\n", truth.season_record));
    sheet.push_str(&format!("Total Games: {}\n", truth.total_games));
    sheet.push_str(&format!(
        "Top Scorer: {} ({} goals)\n",
        truth.top_scorer.name, truth.top_scorer.count
    ));
    sheet.push_str(&format!(
        "Top Assists: {} ({} assists)\n",
        truth.top_assists.name, truth.top_assists.count
    ));
    sheet.push_str(&format!("Total Team Goals: {}\n", truth.total_goals));
    sheet.push_str(&format!("Total Team Assists: {}\n", truth.total_assists));
    match &truth.best_shooter {
        Some(best) => sheet.push_str(&format!(
            "Best Shooter: {} ({:.1}%)\n",
            best.name, best.shooting_pct
        )),
        None => sheet.push_str("Best Shooter: N/A\n"),
    }
    sheet.push_str(&format!(
        "Active Scorers (5+ goals): {}\n",
        truth.active_scorers
    ));
    sheet.push_str("Top-3 Shooting %:");
    for line in &truth.top3_shooting {
        sheet.push_str(&format!(" {} {:.1}%", line.name, line.shooting_pct));
    }
    sheet.push('\n');
    sheet.push_str(&format!("Players with 10+ goals: {}\n", truth.depth_count));
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;
    use crate::data::reference_dataset;

    #[test]
    fn test_context_contains_record_and_totals() {
        let (roster, team) = reference_dataset();
        let context = data_context(&roster, &team);
        assert!(context.contains("TEAM RECORD: 16-6 (22 games)"));
        assert!(context.contains("- Meaghan Tyrrell: 70G, 32A, 102Pts, 115 shots (60.9%)"));
        assert!(context.contains("TEAM TOTALS: 319 Goals, 167 Assists"));
    }

    #[test]
    fn test_context_skips_non_contributors() {
        let (roster, team) = reference_dataset();
        let context = data_context(&roster, &team);
        // 10th-ranked rows with zero goals never appear
        assert!(!context.contains("Katie Goodale"));
    }

    #[test]
    fn test_prompt_set_shape() {
        let (roster, team) = reference_dataset();
        let prompts = generate_test_prompts(&roster, &team);
        assert_eq!(prompts.len(), 8);
        assert_eq!(
            prompts
                .iter()
                .filter(|p| p.tier == PromptTier::Basic)
                .count(),
            5
        );
        assert_eq!(
            prompts
                .iter()
                .filter(|p| p.tier == PromptTier::Intermediate)
                .count(),
            2
        );
        assert_eq!(prompts[7].question_type, QuestionType::StrategicAnalysis);
        assert!(prompts[0].prompt.contains("TEAM RECORD"));
    }

    #[test]
    fn test_answer_sheet() {
        let (roster, team) = reference_dataset();
        let truth = GroundTruth::compute(&roster, &team, &ValidationConfig::default()).unwrap();
        let sheet = answer_sheet(&truth);
        assert!(sheet.contains("Season Record: 16-6"));
        assert!(sheet.contains("Top Scorer: Meaghan Tyrrell (70 goals)"));
        assert!(sheet.contains("Best Shooter: Kendall Rose (72.7%)"));
        assert!(sheet.contains("Players with 10+ goals: 9"));
    }
}
