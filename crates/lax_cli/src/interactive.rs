//! Interactive testing menu: paste model responses, validate them on the
//! spot, and accumulate records for a summary report.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use lax_core::prompts::{self, TestPrompt};
use lax_core::{GroundTruth, ResultAggregator, ValidationConfig, ValidationEngine};

pub struct InteractiveSession {
    engine: ValidationEngine,
    aggregator: ResultAggregator,
    prompts: Vec<TestPrompt>,
    context: String,
}

impl InteractiveSession {
    pub fn new(config: ValidationConfig) -> Result<Self> {
        let (roster, team) = lax_core::data::reference_dataset();
        let truth = GroundTruth::compute(&roster, &team, &config)?;
        let prompt_set = prompts::generate_test_prompts(&roster, &team);
        let context = prompts::data_context(&roster, &team);
        Ok(Self {
            engine: ValidationEngine::new(Arc::new(truth), config),
            aggregator: ResultAggregator::new(),
            prompts: prompt_set,
            context,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        println!("=== SYRACUSE WOMEN'S LACROSSE 2024 LLM TESTING ===");
        println!("{}", prompts::answer_sheet(self.engine.ground_truth()));
        println!("=== {} TEST PROMPTS GENERATED ===", self.prompts.len());

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            println!("\n{}", "=".repeat(60));
            println!("TESTING MENU:");
            println!("1. Show test prompt");
            println!("2. Validate LLM response");
            println!("3. Show all prompts");
            println!("4. Generate summary report");
            println!("5. Export data context for LLM");
            println!("6. Exit");
            print!("\nEnter choice (1-6): ");
            io::stdout().flush()?;

            let choice = match lines.next() {
                Some(line) => line?,
                None => break, // stdin closed
            };

            match choice.trim() {
                "1" => self.show_prompt(&mut lines)?,
                "2" => self.validate_response(&mut lines)?,
                "3" => self.show_all_prompts(),
                "4" => println!("{}", self.aggregator.render_markdown()),
                "5" => println!("{}", self.context),
                "6" => break,
                other => println!("Invalid choice: {}", other),
            }
        }

        Ok(())
    }

    fn show_prompt<B: BufRead>(&self, lines: &mut io::Lines<B>) -> Result<()> {
        println!("\nAvailable prompts:");
        for (i, prompt) in self.prompts.iter().enumerate() {
            println!(
                "{}. {}: {}",
                i + 1,
                prompt.tier.label(),
                prompt.question_type
            );
        }
        print!("Select prompt number: ");
        io::stdout().flush()?;

        let selection = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        match selection.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= self.prompts.len() => {
                let prompt = &self.prompts[n - 1];
                println!("\n{}", "=".repeat(60));
                println!("PROMPT TIER: {}", prompt.tier.label().to_uppercase());
                println!("QUESTION: {}", prompt.question_type);
                println!("{}", "=".repeat(60));
                println!("{}", prompt.prompt);
                println!("{}", "=".repeat(60));
            }
            _ => println!("Invalid selection"),
        }
        Ok(())
    }

    fn show_all_prompts(&self) {
        for (i, prompt) in self.prompts.iter().enumerate() {
            println!("\n{}", "=".repeat(40));
            println!(
                "PROMPT {}: {} - {}",
                i + 1,
                prompt.tier.label().to_uppercase(),
                prompt.question_type
            );
            println!("{}", "=".repeat(40));
            println!("{}", preview(&prompt.prompt, 200));
        }
    }

    fn validate_response<B: BufRead>(&mut self, lines: &mut io::Lines<B>) -> Result<()> {
        println!("\nQuestion types available:");
        for q in lax_core::QuestionType::ALL {
            println!("- {}", q);
        }

        print!("Enter question type: ");
        io::stdout().flush()?;
        let tag = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        print!("Paste LLM response here: ");
        io::stdout().flush()?;
        let response = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let tag = tag.trim();
        let response = response.trim();
        let result = self.engine.validate_tagged(response, tag);

        println!("\n{}", "=".repeat(50));
        println!("VALIDATION RESULT:");
        println!(
            "Accuracy: {}",
            if result.accuracy { "CORRECT" } else { "INCORRECT" }
        );
        println!("Expected: {}", result.expected);
        if let Some(kind) = result.error {
            println!("Error Type: {}", kind);
        }
        if !result.notes.is_empty() {
            println!("Notes: {}", result.notes.join("; "));
        }
        println!("{}", "=".repeat(50));

        let category = result
            .question_type
            .map(question_tier)
            .unwrap_or(lax_core::PromptTier::Basic);
        self.aggregator
            .add_result(category, tag.to_string(), response.to_string(), result);
        Ok(())
    }
}

/// Tier a question type belongs to in the canned prompt set.
pub fn question_tier(question_type: lax_core::QuestionType) -> lax_core::PromptTier {
    use lax_core::{PromptTier, QuestionType};
    match question_type {
        QuestionType::SeasonRecord
        | QuestionType::TotalGames
        | QuestionType::TopScorer
        | QuestionType::TeamGoals
        | QuestionType::TopAssists => PromptTier::Basic,
        QuestionType::ShootingAnalysis | QuestionType::OffensiveBalance => {
            PromptTier::Intermediate
        }
        QuestionType::StrategicAnalysis => PromptTier::Complex,
    }
}

/// First `max` characters with an ellipsis marker when truncated.
fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lax_core::{PromptTier, QuestionType};

    #[test]
    fn test_question_tiers() {
        assert_eq!(question_tier(QuestionType::SeasonRecord), PromptTier::Basic);
        assert_eq!(
            question_tier(QuestionType::ShootingAnalysis),
            PromptTier::Intermediate
        );
        assert_eq!(
            question_tier(QuestionType::StrategicAnalysis),
            PromptTier::Complex
        );
    }

    #[test]
    fn test_preview_truncation() {
        assert_eq!(preview("short", 200), "short");
        let long = "a".repeat(250);
        let shown = preview(&long, 200);
        assert_eq!(shown.chars().count(), 203);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_session_constructs() {
        let session = InteractiveSession::new(ValidationConfig::default());
        assert!(session.is_ok());
    }
}
