use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use lead_quality::app::dry_run_use_case::DryRunUseCase;
use lead_quality::config::Config;
use lead_quality::observability;

/// Clean, validate, dedupe and remap a CSV of leads without importing anything.
#[derive(Parser, Debug)]
#[command(name = "lead_quality", version, about = "Lead Quality CLI (dry-run)")]
struct Cli {
    /// Path to CSV file
    #[arg(long)]
    input: PathBuf,

    /// Path to mapping.json (defaults to config/mapping.json)
    #[arg(long)]
    mapping: Option<PathBuf>,

    /// Directory for payload.json and report.json (defaults to out)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Optional TOML settings file (defaults to lead_quality.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_env();
    if let Some(mapping) = cli.mapping {
        config.mapping_path = mapping;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    let _guard = observability::init_logging(&config.log_dir);
    info!(?config, "Starting dry run");

    let use_case = DryRunUseCase::with_file_adapters(&config.output_dir);
    let outcome = use_case
        .execute(&cli.input, &config.mapping_path)
        .inspect_err(|e| error!(error = %e, "Dry run aborted"))
        .with_context(|| format!("Dry run failed for {}", cli.input.display()))?;

    for line in outcome.summary_lines() {
        println!("{}", line);
    }

    Ok(())
}
