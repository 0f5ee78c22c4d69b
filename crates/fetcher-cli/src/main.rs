//! CRMScript Fetcher CLI
//!
//! Materializes a fetched tenant payload (one JSON file) as a local
//! folder/file tree. The HTTP fetch itself lives elsewhere; this binary
//! consumes the payload it produced.

mod cli;
mod config;
mod error;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use fetcher_engine::MaterializationSession;
use fetcher_model::{FetchedData, Plan};

use cli::{Cli, Commands};
use config::TenantConfig;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Materialize {
            input,
            target,
            config,
        }) => cmd_materialize(&input, target, config),
        None => {
            println!("{} CRMScript Fetcher CLI", "crmfetch".green().bold());
            println!();
            println!("Run {} for available commands.", "crmfetch --help".cyan());
            Ok(())
        }
    }
}

fn cmd_materialize(
    input: &PathBuf,
    target: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let plan = resolve_plan(target, config)?;

    let payload = fs::read_to_string(input)?;
    let data: FetchedData = serde_json::from_str(&payload)?;

    let session = MaterializationSession::default();
    let report = session.run(&data, &plan)?;

    for category in &report.completed {
        println!("{} {}", "done".green(), category);
    }
    for (category, message) in &report.errors {
        println!("{} {}: {}", "failed".red().bold(), category, message);
    }

    if report.success {
        println!(
            "{} materialized under {}",
            "ok".green().bold(),
            plan.target_root.display()
        );
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} of {} categories failed; backups of their previous output remain under {}",
            report.errors.len(),
            report.errors.len() + report.completed.len(),
            plan.temp_dir().display()
        )))
    }
}

/// A plan comes from the tenant config file, the --target flag, or both
/// (the flag wins for the target directory).
fn resolve_plan(target: Option<PathBuf>, config: Option<PathBuf>) -> Result<Plan> {
    let mut plan = match config {
        Some(path) => TenantConfig::load(&path)?.into_plan(),
        None => match &target {
            Some(dir) => Plan::new(dir),
            None => {
                return Err(CliError::user(
                    "either --target or --config must be given",
                ));
            }
        },
    };

    if let Some(dir) = target {
        plan.target_root = dir;
    }

    if !plan.target_root.is_dir() {
        return Err(CliError::user(format!(
            "target directory does not exist: {}",
            plan.target_root.display()
        )));
    }

    Ok(plan)
}
