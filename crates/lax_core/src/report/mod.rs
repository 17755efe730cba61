//! # Result Aggregation and Reporting
//!
//! Accumulates test records in receipt order, then summarizes per-category
//! accuracy rates and error-kind frequencies. Summaries are deterministic
//! for a fixed record sequence; only the receipt timestamps vary.
//!
//! Appending is the single mutable path in the crate. Callers that validate
//! concurrently must serialize calls to [`ResultAggregator::add_result`]
//! (e.g. behind a mutex); the aggregator itself takes `&mut self`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{ErrorKind, ValidationResult};

/// Prompt difficulty tier; the report's grouping category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTier {
    Basic,
    Intermediate,
    Complex,
}

impl PromptTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptTier::Basic => "basic",
            PromptTier::Intermediate => "intermediate",
            PromptTier::Complex => "complex",
        }
    }

    /// Title-case label for report headings.
    pub fn label(&self) -> &'static str {
        match self {
            PromptTier::Basic => "Basic",
            PromptTier::Intermediate => "Intermediate",
            PromptTier::Complex => "Complex",
        }
    }
}

impl fmt::Display for PromptTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated exchange: question, raw response, and the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    pub timestamp: DateTime<Utc>,
    pub category: PromptTier,
    pub question: String,
    pub response: String,
    pub result: ValidationResult,
}

/// Per-category accuracy tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: PromptTier,
    pub total: u32,
    pub accurate: u32,
}

impl CategoryStats {
    /// Accuracy rate in percent; 0.0 for an empty category.
    pub fn success_rate(&self) -> f64 {
        if self.total > 0 {
            self.accurate as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Deterministic summary over a fixed record sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_tests: u32,
    /// Per-category tallies in first-seen order.
    pub categories: Vec<CategoryStats>,
    /// Up to 3 example questions that validated successfully.
    pub example_successes: Vec<String>,
    /// Error-kind frequencies among failures, in first-seen order.
    pub error_counts: Vec<(ErrorKind, u32)>,
}

/// Append-only store of test records.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    records: Vec<TestRecord>,
}

/// Number of example successes surfaced in the summary.
const MAX_EXAMPLE_SUCCESSES: usize = 3;

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, stamping the receipt time. Records are never
    /// removed or reordered.
    pub fn add_result(
        &mut self,
        category: PromptTier,
        question: impl Into<String>,
        response: impl Into<String>,
        result: ValidationResult,
    ) {
        self.records.push(TestRecord {
            timestamp: Utc::now(),
            category,
            question: question.into(),
            response: response.into(),
            result,
        });
    }

    /// Append an already-stamped record (e.g. replayed from a session file).
    pub fn add_record(&mut self, record: TestRecord) {
        self.records.push(record);
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Group by category in first-seen order and tally accuracy and error
    /// kinds.
    pub fn summarize(&self) -> ReportSummary {
        let mut categories: Vec<CategoryStats> = Vec::new();
        let mut example_successes = Vec::new();
        let mut error_counts: Vec<(ErrorKind, u32)> = Vec::new();

        for record in &self.records {
            match categories.iter_mut().find(|c| c.category == record.category) {
                Some(stats) => stats.total += 1,
                None => categories.push(CategoryStats {
                    category: record.category,
                    total: 1,
                    accurate: 0,
                }),
            }

            if record.result.accuracy {
                if let Some(stats) = categories.iter_mut().find(|c| c.category == record.category)
                {
                    stats.accurate += 1;
                }
                if example_successes.len() < MAX_EXAMPLE_SUCCESSES {
                    example_successes.push(record.question.clone());
                }
            } else if let Some(kind) = record.result.error {
                match error_counts.iter_mut().find(|(k, _)| *k == kind) {
                    Some((_, count)) => *count += 1,
                    None => error_counts.push((kind, 1)),
                }
            }
        }

        ReportSummary {
            total_tests: self.records.len() as u32,
            categories,
            example_successes,
            error_counts,
        }
    }

    /// Render the Markdown summary report.
    pub fn render_markdown(&self) -> String {
        if self.records.is_empty() {
            return "No results to analyze.".to_string();
        }

        let summary = self.summarize();
        let mut report = String::from("# LLM Testing Summary Report\n\n");
        report.push_str(&format!("**Total Tests Conducted:** {}\n", summary.total_tests));
        report.push_str(&format!(
            "**Test Date:** {}\n\n",
            Utc::now().format("%Y-%m-%d")
        ));

        report.push_str("## Success Rates by Question Category\n\n");
        for stats in &summary.categories {
            report.push_str(&format!(
                "- **{}**: {:.1}% ({}/{})\n",
                stats.category.label(),
                stats.success_rate(),
                stats.accurate,
                stats.total
            ));
        }

        report.push_str("\n## Key Findings\n\n");

        if !summary.example_successes.is_empty() {
            report.push_str("### Successful Patterns\n");
            for question in &summary.example_successes {
                report.push_str(&format!("- {}: Success\n", question));
            }
        }

        if !summary.error_counts.is_empty() {
            report.push_str("\n### Common Errors\n");
            for (kind, count) in &summary.error_counts {
                report.push_str(&format!("- {}: {} occurrences\n", kind.label(), count));
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ExpectedAnswer, QuestionType};

    fn make_result(question_type: QuestionType, accuracy: bool, error: Option<ErrorKind>) -> ValidationResult {
        ValidationResult {
            question_type: Some(question_type),
            accuracy,
            error,
            notes: Vec::new(),
            expected: ExpectedAnswer::Count { value: 22 },
            response_excerpt: "r".to_string(),
        }
    }

    fn seeded_aggregator() -> ResultAggregator {
        let mut agg = ResultAggregator::new();
        agg.add_result(
            PromptTier::Basic,
            "Q1",
            "R1",
            make_result(QuestionType::TotalGames, true, None),
        );
        agg.add_result(
            PromptTier::Basic,
            "Q2",
            "R2",
            make_result(
                QuestionType::TopScorer,
                false,
                Some(ErrorKind::IncorrectPlayer),
            ),
        );
        agg.add_result(
            PromptTier::Intermediate,
            "Q3",
            "R3",
            make_result(
                QuestionType::ShootingAnalysis,
                false,
                Some(ErrorKind::IncorrectShootingAnalysis),
            ),
        );
        agg.add_result(
            PromptTier::Basic,
            "Q4",
            "R4",
            make_result(
                QuestionType::TopAssists,
                false,
                Some(ErrorKind::IncorrectPlayer),
            ),
        );
        agg
    }

    #[test]
    fn test_summary_groups_in_first_seen_order() {
        let summary = seeded_aggregator().summarize();
        assert_eq!(summary.total_tests, 4);
        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.categories[0].category, PromptTier::Basic);
        assert_eq!(summary.categories[0].total, 3);
        assert_eq!(summary.categories[0].accurate, 1);
        assert_eq!(summary.categories[1].category, PromptTier::Intermediate);
        assert_eq!(summary.categories[1].total, 1);
    }

    #[test]
    fn test_error_frequency_table() {
        let summary = seeded_aggregator().summarize();
        assert_eq!(
            summary.error_counts,
            vec![
                (ErrorKind::IncorrectPlayer, 2),
                (ErrorKind::IncorrectShootingAnalysis, 1),
            ]
        );
    }

    #[test]
    fn test_success_rate_guard_on_empty() {
        let stats = CategoryStats {
            category: PromptTier::Complex,
            total: 0,
            accurate: 0,
        };
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_empty_aggregator_report() {
        let agg = ResultAggregator::new();
        assert_eq!(agg.render_markdown(), "No results to analyze.");
        assert_eq!(agg.summarize().total_tests, 0);
    }

    #[test]
    fn test_example_successes_capped() {
        let mut agg = ResultAggregator::new();
        for i in 0..5 {
            agg.add_result(
                PromptTier::Basic,
                format!("Q{}", i),
                "R",
                make_result(QuestionType::TotalGames, true, None),
            );
        }
        let summary = agg.summarize();
        assert_eq!(summary.example_successes, vec!["Q0", "Q1", "Q2"]);
    }

    #[test]
    fn test_markdown_sections() {
        let report = seeded_aggregator().render_markdown();
        assert!(report.contains("# LLM Testing Summary Report"));
        assert!(report.contains("**Total Tests Conducted:** 4"));
        assert!(report.contains("- **Basic**: 33.3% (1/3)"));
        assert!(report.contains("### Successful Patterns"));
        assert!(report.contains("- Q1: Success"));
        assert!(report.contains("- Incorrect Player: 2 occurrences"));
    }

    #[test]
    fn test_records_preserve_insertion_order() {
        let agg = seeded_aggregator();
        let questions: Vec<&str> = agg.records().iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["Q1", "Q2", "Q3", "Q4"]);
    }

    #[test]
    fn test_record_json_round_trip() {
        let agg = seeded_aggregator();
        let json = serde_json::to_string(&agg.records()[0]).unwrap();
        let back: TestRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.question, "Q1");
        assert_eq!(back.category, PromptTier::Basic);
        assert!(back.result.accuracy);
    }
}
