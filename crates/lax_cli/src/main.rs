//! LLM testing CLI
//!
//! Generates test prompts over the embedded 2024 season statistics,
//! validates pasted model responses against ground truth, and renders
//! summary reports.

mod interactive;
mod session;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lax_core::prompts;
use lax_core::{
    GroundTruth, PromptTier, TestRecord, ValidationConfig, ValidationEngine,
};

#[derive(Parser)]
#[command(name = "lax")]
#[command(about = "Validate LLM responses against 2024 lacrosse season statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the generated test prompts
    Prompts {
        /// Only show prompts for this tier (basic, intermediate, complex)
        #[arg(long)]
        tier: Option<String>,

        /// Print full prompt text instead of one-line summaries
        #[arg(long, default_value = "false")]
        full: bool,
    },

    /// Print or export the data context handed to the model under test
    Context {
        /// Write the context to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the ground-truth answer sheet
    Answers,

    /// Validate a single LLM response
    Validate {
        /// Question type tag (e.g. top_scorer)
        #[arg(long)]
        question_type: String,

        /// Response text inline
        #[arg(long, conflicts_with = "file")]
        response: Option<String>,

        /// Read the response text from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Append the validated record to a JSONL session file
        #[arg(long)]
        session: Option<PathBuf>,
    },

    /// Aggregate a session file and render the Markdown summary report
    Report {
        /// JSONL session file produced by `validate --session`
        #[arg(long)]
        session: PathBuf,

        /// Write the report to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write the reference roster as CSV
    ExportCsv {
        /// Output CSV file path
        #[arg(long)]
        out: PathBuf,
    },

    /// Run the interactive testing menu
    Interactive,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ValidationConfig::default();

    match cli.command {
        Commands::Prompts { tier, full } => cmd_prompts(tier.as_deref(), full),
        Commands::Context { out } => cmd_context(out),
        Commands::Answers => cmd_answers(&config),
        Commands::Validate {
            question_type,
            response,
            file,
            session,
        } => cmd_validate(&config, &question_type, response, file, session),
        Commands::Report { session, out } => cmd_report(&session, out),
        Commands::ExportCsv { out } => cmd_export_csv(&out),
        Commands::Interactive => interactive::InteractiveSession::new(config)?.run(),
    }
}

fn parse_tier(tag: &str) -> Result<PromptTier> {
    match tag {
        "basic" => Ok(PromptTier::Basic),
        "intermediate" => Ok(PromptTier::Intermediate),
        "complex" => Ok(PromptTier::Complex),
        other => anyhow::bail!("unknown tier: {} (expected basic, intermediate, complex)", other),
    }
}

fn cmd_prompts(tier: Option<&str>, full: bool) -> Result<()> {
    let tier = tier.map(parse_tier).transpose()?;
    let (roster, team) = lax_core::data::reference_dataset();
    let prompt_set = prompts::generate_test_prompts(&roster, &team);

    for (i, prompt) in prompt_set.iter().enumerate() {
        if let Some(wanted) = tier {
            if prompt.tier != wanted {
                continue;
            }
        }
        if full {
            println!("\n=== PROMPT {}: {} - {} ===", i + 1, prompt.tier, prompt.question_type);
            println!("{}", prompt.prompt);
        } else {
            println!("{}. {}: {}", i + 1, prompt.tier.label(), prompt.question_type);
        }
    }
    Ok(())
}

fn cmd_context(out: Option<PathBuf>) -> Result<()> {
    let (roster, team) = lax_core::data::reference_dataset();
    let context = prompts::data_context(&roster, &team);
    match out {
        Some(path) => {
            fs::write(&path, &context)
                .with_context(|| format!("writing context to {}", path.display()))?;
            println!("Data context exported to {}", path.display());
        }
        None => println!("{}", context),
    }
    Ok(())
}

fn cmd_answers(config: &ValidationConfig) -> Result<()> {
    let (roster, team) = lax_core::data::reference_dataset();
    let truth = GroundTruth::compute(&roster, &team, config)?;
    print!("{}", prompts::answer_sheet(&truth));
    Ok(())
}

fn cmd_validate(
    config: &ValidationConfig,
    question_type: &str,
    response: Option<String>,
    file: Option<PathBuf>,
    session: Option<PathBuf>,
) -> Result<()> {
    let response = match (response, file) {
        (Some(text), None) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("reading response from {}", path.display()))?,
        _ => anyhow::bail!("provide exactly one of --response or --file"),
    };

    let (roster, team) = lax_core::data::reference_dataset();
    let truth = GroundTruth::compute(&roster, &team, config)?;
    let engine = ValidationEngine::new(Arc::new(truth), config.clone());

    let result = engine.validate_tagged(response.trim(), question_type);

    println!(
        "Accuracy: {}",
        if result.accuracy { "CORRECT" } else { "INCORRECT" }
    );
    println!("Expected: {}", result.expected);
    if let Some(kind) = result.error {
        println!("Error Type: {}", kind);
    }
    for note in &result.notes {
        println!("Note: {}", note);
    }

    if let Some(path) = session {
        let category = result
            .question_type
            .map(interactive::question_tier)
            .unwrap_or(PromptTier::Basic);
        let record = TestRecord {
            timestamp: chrono::Utc::now(),
            category,
            question: question_type.to_string(),
            response: response.trim().to_string(),
            result,
        };
        session::append_record(&path, &record)?;
        println!("Record appended to {}", path.display());
    }

    Ok(())
}

fn cmd_report(session_path: &PathBuf, out: Option<PathBuf>) -> Result<()> {
    let aggregator = session::load_session(session_path)?;
    let report = aggregator.render_markdown();
    match out {
        Some(path) => {
            fs::write(&path, &report)
                .with_context(|| format!("writing report to {}", path.display()))?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", report),
    }
    Ok(())
}

fn cmd_export_csv(out: &PathBuf) -> Result<()> {
    let roster = lax_core::data::reference_roster();
    write_roster_csv(out, &roster)?;
    println!("Reference roster exported to {}", out.display());
    Ok(())
}

/// Write the roster with derived rate columns, matching the reference CSV
/// layout used in the original study.
fn write_roster_csv(path: &std::path::Path, roster: &lax_core::Roster) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record([
        "Player",
        "Jersey",
        "Goals",
        "Assists",
        "Points",
        "Shots",
        "Games_Played",
        "Shooting_Pct",
        "Goals_Per_Game",
        "Points_Per_Game",
    ])?;
    for player in roster.players() {
        writer.write_record([
            player.name.clone(),
            player.jersey.to_string(),
            player.goals.to_string(),
            player.assists.to_string(),
            player.points.to_string(),
            player.shots.to_string(),
            player.games_played.to_string(),
            format!("{:.6}", player.shooting_pct()),
            format!("{:.6}", player.goals_per_game()),
            format!("{:.6}", player.points_per_game()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
