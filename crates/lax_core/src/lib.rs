//! # lax_core - LLM Response Validation Engine
//!
//! Evaluates free-text answers from an external language model against
//! ground truth derived from a lacrosse season statistics table, classifying
//! each answer as accurate or inaccurate and diagnosing the failure mode.
//!
//! ## Features
//! - Deterministic ground truth computed once from the roster
//! - One matching policy per question type, tolerance-based numeric checks
//! - Heuristic 3-axis rubric for open-ended strategic answers
//! - Append-only result aggregation with Markdown summary rendering
//!
//! The engine performs no I/O; callers supply response text and consume
//! plain result values.

pub mod config;
pub mod data;
pub mod error;
pub mod extract;
pub mod ground_truth;
pub mod models;
pub mod prompts;
pub mod report;
pub mod rubric;
pub mod validation;

pub use config::ValidationConfig;
pub use error::{Result, ValidatorError};
pub use ground_truth::{GroundTruth, NamedCount, ShooterLine};
pub use models::{PlayerRow, Roster, TeamAggregate, TeamRecord};
pub use report::{PromptTier, ReportSummary, ResultAggregator, TestRecord};
pub use rubric::{HeuristicRubric, RubricScores, StrategicScorer};
pub use validation::{
    ErrorKind, ExpectedAnswer, QuestionType, ValidationEngine, ValidationResult,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_end_to_end_session() {
        let config = ValidationConfig::default();
        let (roster, team) = data::reference_dataset();
        let truth = GroundTruth::compute(&roster, &team, &config).unwrap();
        let engine = ValidationEngine::new(Arc::new(truth), config);
        let mut aggregator = ResultAggregator::new();

        let cases = [
            (QuestionType::SeasonRecord, "Syracuse went 16-6.", true),
            (QuestionType::TotalGames, "They played 22 games.", true),
            (
                QuestionType::TopScorer,
                "Olivia Adamson led the team with 58 goals",
                false,
            ),
        ];

        for (question_type, response, expected) in cases {
            let result = engine.validate(response, question_type);
            assert_eq!(result.accuracy, expected, "{}", question_type);
            aggregator.add_result(PromptTier::Basic, question_type.as_str(), response, result);
        }

        let summary = aggregator.summarize();
        assert_eq!(summary.total_tests, 3);
        assert_eq!(summary.categories[0].accurate, 2);
        assert_eq!(
            summary.error_counts,
            vec![(ErrorKind::IncorrectPlayer, 1)]
        );

        let report = aggregator.render_markdown();
        assert!(report.contains("**Total Tests Conducted:** 3"));
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationEngine>();
        assert_send_sync::<GroundTruth>();
    }
}
