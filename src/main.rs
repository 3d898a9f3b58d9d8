use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use stylometer::{SentenceStrategy, StoryAnalysis};

#[derive(Parser)]
#[command(
    name = "stylometer",
    about = "Stylometric profile and AI-authorship heuristics for short prose",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<String>,

    /// Split sentences on terminal punctuation only, without abbreviation
    /// handling
    #[arg(long)]
    naive_sentences: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    #[serde(flatten)]
    analysis: StoryAnalysis,
}

fn print_report(source: &str, analysis: StoryAnalysis) -> Result<()> {
    let report = Report { source, analysis };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn analyze_file(path: &str, strategy: SentenceStrategy) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {path}"))?;
    let text = stylometer::validate_text(&bytes)?;
    print_report(path, stylometer::analyze_with(text, strategy))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let strategy = if cli.naive_sentences {
        SentenceStrategy::Naive
    } else {
        SentenceStrategy::RuleBased
    };

    if cli.files.is_empty() {
        let mut input = Vec::new();
        std::io::stdin()
            .read_to_end(&mut input)
            .context("failed to read stdin")?;
        let text = stylometer::validate_text(&input)?;
        print_report("-", stylometer::analyze_with(text, strategy))?;
    } else {
        let mut failed = false;
        for path in &cli.files {
            if let Err(e) = analyze_file(path, strategy) {
                eprintln!("{path}: {e:#}");
                failed = true;
            }
        }
        if failed {
            std::process::exit(1);
        }
    }
    Ok(())
}
