//! site-check
//!
//! Offline front end for the two engines:
//!
//! - `classify` - operating-permit classification of a questionnaire
//! - `assess` - location risk of previously fetched GIS lookups
//! - `defaults` - the built-in risk configuration as TOML
//!
//! Results go to stdout as pretty JSON, logs go to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use compliance_engine::{ClassificationEngine, ComplianceAnswers};
use serde::de::DeserializeOwned;
use serde::Serialize;
use site_risk_engine::{aggregate_risk_with, RawGisResult, RiskConfig};
use tracing::{debug, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for site-check
#[derive(Parser, Debug)]
#[command(name = "site-check")]
#[command(about = "Operating-permit classification and location risk assessment")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify questionnaire answers (JSON)
    Classify {
        /// Path to the answers file
        answers: PathBuf,
    },
    /// Aggregate the risk of raw GIS lookups (JSON)
    Assess {
        /// Path to the raw lookup file
        raw: PathBuf,

        /// Risk configuration (TOML); built-in defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the default risk configuration
    Defaults,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = run(args.command)?;
    println!("{}", output);
    Ok(())
}

fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Classify { answers } => {
            let answers: ComplianceAnswers = read_json(&answers)?;
            let result = ClassificationEngine::new().classify(&answers);
            info!(classification = ?result.classification, "classified");
            to_pretty_json(&result)
        }
        Command::Assess { raw, config } => {
            let config = match config {
                Some(path) => RiskConfig::from_file(&path)?,
                None => RiskConfig::default(),
            };
            let raw: RawGisResult = read_json(&raw)?;
            let result = aggregate_risk_with(&raw, &config);
            info!(band = ?result.overall_risk, score = result.score, "assessed");
            to_pretty_json(&result)
        }
        Command::Defaults => RiskConfig::default().to_toml(),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    debug!(path = %path.display(), "reading input");
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn to_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize result")
}
