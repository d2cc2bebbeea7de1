use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

use auditseed_core::{ColumnSpec, Error as CoreError, ValidationRules};
use auditseed_generate::{AugmentEngine, AugmentError, AugmentOptions, DEFAULT_SEED};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("augmentation error: {0}")]
    Augment(#[from] AugmentError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "auditseed", version, about = "Seed-data audit column augmenter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append audit columns with fake data to a seed-data load file.
    Augment(AugmentArgs),
}

#[derive(Args, Debug)]
struct AugmentArgs {
    /// Path to the `;`-delimited seed-data file, overwritten in place.
    file: PathBuf,
    /// JSON file holding an array of column specs; defaults to the built-in
    /// audit column set.
    #[arg(long)]
    columns: Option<PathBuf>,
    /// RNG seed for reproducible output.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Reference instant for recent dates, `YYYY-MM-DDTHH:MM:SS`.
    #[arg(long)]
    reference: Option<String>,
    /// Suppress the JSON report on stdout.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Augment(args) => run_augment(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_augment(args: AugmentArgs) -> Result<(), CliError> {
    let columns = match &args.columns {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            serde_json::from_str::<Vec<ColumnSpec>>(&text)?
        }
        None => default_audit_columns(),
    };

    let mut options = AugmentOptions::default();
    options.seed = args.seed;
    if let Some(reference) = &args.reference {
        options.reference = parse_reference(reference)?;
    }

    let engine = AugmentEngine::new(options);
    let report = engine.run(&args.file, &columns)?;

    if !args.quiet {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, CliError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").map_err(|err| {
        CliError::InvalidConfig(format!("reference must be YYYY-MM-DDTHH:MM:SS: {err}"))
    })
}

/// Audit columns loaded into fake data by default. Timestamp audit columns
/// carry database defaults and need no seed values.
fn default_audit_columns() -> Vec<ColumnSpec> {
    vec![ColumnSpec {
        database_column: "created_by".to_string(),
        field_type: "varchar".to_string(),
        validate_rules: ValidationRules {
            required: true,
            max_length: Some(50),
            ..Default::default()
        },
    }]
}
