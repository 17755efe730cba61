//! Session persistence: one JSON-encoded `TestRecord` per line, so sessions
//! can be appended to across runs and replayed for reporting.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use lax_core::{ResultAggregator, TestRecord};
use log::debug;

/// Append a record to a JSONL session file, creating it if needed.
pub fn append_record(path: &Path, record: &TestRecord) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening session file {}", path.display()))?;
    let line = serde_json::to_string(record)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// Load a JSONL session file into an aggregator, preserving line order.
pub fn load_session(path: &Path) -> Result<ResultAggregator> {
    let file = File::open(path)
        .with_context(|| format!("opening session file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut aggregator = ResultAggregator::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: TestRecord = serde_json::from_str(&line)
            .with_context(|| format!("parsing session record on line {}", line_no + 1))?;
        aggregator.add_record(record);
    }
    debug!(
        "loaded {} session records from {}",
        aggregator.records().len(),
        path.display()
    );
    Ok(aggregator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lax_core::validation::ExpectedAnswer;
    use lax_core::{PromptTier, QuestionType, ValidationResult};

    fn make_record(question: &str, accuracy: bool) -> TestRecord {
        TestRecord {
            timestamp: chrono::Utc::now(),
            category: PromptTier::Basic,
            question: question.to_string(),
            response: "resp".to_string(),
            result: ValidationResult {
                question_type: Some(QuestionType::TotalGames),
                accuracy,
                error: None,
                notes: Vec::new(),
                expected: ExpectedAnswer::Count { value: 22 },
                response_excerpt: "resp".to_string(),
            },
        }
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");

        append_record(&path, &make_record("Q1", true)).unwrap();
        append_record(&path, &make_record("Q2", false)).unwrap();

        let aggregator = load_session(&path).unwrap();
        assert_eq!(aggregator.records().len(), 2);
        assert_eq!(aggregator.records()[0].question, "Q1");
        assert_eq!(aggregator.records()[1].question, "Q2");
        assert_eq!(aggregator.summarize().categories[0].accurate, 1);
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        append_record(&path, &make_record("Q1", true)).unwrap();
        std::fs::write(
            &path,
            format!("{}\n\n", std::fs::read_to_string(&path).unwrap()),
        )
        .unwrap();

        let aggregator = load_session(&path).unwrap();
        assert_eq!(aggregator.records().len(), 1);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_session(&dir.path().join("absent.jsonl")).is_err());
    }
}
