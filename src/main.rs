//! Command-line entry point for the contribution projection engine.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use contrib_engine::calculation::{evaluate_checks, project};
use contrib_engine::config::{ConfigLoader, EmployeeConfig};
use contrib_engine::ingest::load_paystub;
use contrib_engine::report::render_report;

#[derive(Parser, Debug)]
#[command(
    name = "contrib-engine",
    version,
    about = "Projects year-end 401(k) contributions from a paystub snapshot"
)]
struct Cli {
    /// Paystub sources: a CSV payslip export or a YAML paystub file
    #[arg(required = true, value_name = "PAYSTUB")]
    paystubs: Vec<PathBuf>,

    /// Path to the employee policy configuration file
    #[arg(short, long, default_value = "employee.yaml")]
    config: PathBuf,

    /// Override a paystub field after ingestion, e.g. -s ytd_pretax=9000.00
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Enable diagnostic tracing on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ConfigLoader::load(&cli.config)?;

    for path in &cli.paystubs {
        run_one(path, &cli.overrides, &config)?;
    }

    Ok(())
}

/// Processes a single paystub source to completion: ingest, apply
/// overrides, project, evaluate checks, print the report.
///
/// Any failure aborts the entire run for that paystub; check outcomes do
/// not affect the exit status.
fn run_one(path: &Path, overrides: &[String], config: &EmployeeConfig) -> anyhow::Result<()> {
    tracing::debug!(path = %path.display(), "processing paystub source");

    let mut paystub = load_paystub(path)?;
    for entry in overrides {
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            anyhow::anyhow!("override '{}' is not of the form key=value", entry)
        })?;
        paystub.set_field(key.trim(), value.trim())?;
    }

    let result = project(&paystub, config)?;
    let checks = evaluate_checks(&result, config);

    print!("{}", render_report(&result, &checks));
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
