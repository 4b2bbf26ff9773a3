//! CWM model inspection CLI
//!
//! # Usage
//!
//! ```bash
//! # Validate a model with the strict preset
//! cwm-inspect validate warehouse.json
//!
//! # Lenient import settings, German messages, JSON report
//! cwm-inspect validate warehouse.yaml --config import.yaml --locale de --format json
//!
//! # Element counts per package and meta-class
//! cwm-inspect stats warehouse.json
//! ```
//!
//! Log output is controlled by `RUST_LOG` (default `warn`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use cwm_model::{Locale, ModelConfig, ModelGraph, ModelValidator};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cwm-inspect")]
#[command(about = "Inspect and validate CWM 1.1 metadata models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (YAML, schema v1)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Message locale (en, de)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every CWM constraint; exits 1 when violations are found
    Validate {
        /// Model file (.json, .yaml)
        model: PathBuf,
    },

    /// Print element counts
    Stats {
        /// Model file (.json, .yaml)
        model: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => ModelConfig::from_yaml(path)?,
        None => ModelConfig::default(),
    };
    if let Some(locale) = &cli.locale {
        config = config.locale(Locale::from_str(locale)?);
    }

    match cli.command {
        Commands::Validate { model } => {
            let graph = ModelGraph::load(&model)?;
            let report = ModelValidator::new(&config).validate(&graph)?;
            match cli.format {
                Format::Text => print!("{}", report),
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            Ok(if report.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Commands::Stats { model } => {
            let graph = ModelGraph::load(&model)?;
            let stats = graph.query().model_stats();
            match cli.format {
                Format::Text => print!("{}", stats),
                Format::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
