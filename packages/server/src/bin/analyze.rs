//! One-shot CLI for analyzing a governance proposal
//!
//! Runs the same pipeline as the API server against a single URL and
//! prints the report to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use server_core::config::Config;

use analysis::{export_file_name, ProposalAnalyzer};

#[derive(Parser)]
#[command(name = "analyze")]
#[command(about = "Analyze a governance forum proposal")]
struct Cli {
    /// Forum topic URL, e.g. https://gov.near.org/t/some-proposal/12345
    url: String,

    /// Write the assessment JSON into this directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Default to warnings only so logs stay out of the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let analyzer = ProposalAnalyzer::new(
        &config.analyzer,
        &config.scoring_credentials,
        &config.ecosystem_credentials,
    );

    let report = analyzer
        .analyze(&cli.url)
        .await
        .context("Failed to analyze proposal")?;

    println!("Title: {}", report.post.title);
    println!("URL:   {}", report.post.source_url);
    println!();

    match &report.assessment {
        Ok(assessment) => {
            let json = assessment
                .export_json()
                .context("Failed to serialize assessment")?;
            println!("Assessment:");
            println!("{}", json);

            if let Some(dir) = &cli.export {
                let path = dir.join(export_file_name(Utc::now()));
                std::fs::write(&path, &json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!();
                println!("Assessment written to {}", path.display());
            }
        }
        Err(e) => {
            println!("Assessment failed: {}", e);
        }
    }

    println!();
    println!("Ecosystem analysis:");
    println!("{}", report.ecosystem);

    Ok(())
}
