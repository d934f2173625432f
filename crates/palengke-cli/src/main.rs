use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use palengke_generate::{GenerateOptions, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "palengke", version, about = "Palengke market dataset CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the market dataset (CSV files + INSERT statements).
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Output directory for the generated files.
    #[arg(long, default_value = ".")]
    out: PathBuf,
    /// Seed for the run's random generator.
    #[arg(long, default_value_t = 2025)]
    seed: u64,
    /// Number of customers to draw.
    #[arg(long, default_value_t = 200)]
    customers: u32,
    /// Number of transactions to draw.
    #[arg(long, default_value_t = 300)]
    transactions: u32,
    /// First day of the transaction date window.
    #[arg(long, default_value = "2025-01-01")]
    start_date: NaiveDate,
    /// Length of the transaction date window in days.
    #[arg(long, default_value_t = 90)]
    window_days: u32,
}

fn main() -> Result<(), CliError> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let options = GenerateOptions {
        out_dir: args.out,
        seed: args.seed,
        customers: args.customers,
        transactions: args.transactions,
        start_date: args.start_date,
        window_days: args.window_days,
        ..GenerateOptions::default()
    };

    let timer = Instant::now();
    let engine = GenerationEngine::new(options);
    let result = engine.run()?;

    for table in &result.report.tables {
        tracing::info!(event = "table_written", table = %table.table, rows = table.rows);
    }
    tracing::info!(
        event = "generate_finished",
        out_dir = %result.out_dir.display(),
        duration_ms = timer.elapsed().as_millis() as u64
    );

    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
