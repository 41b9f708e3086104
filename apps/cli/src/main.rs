#![deny(warnings)]

//! Headless CLI: project a leasehold deal and print the ROI report.

mod report;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use lease_config::{load_deal_config, reference_config};
use lease_core::{RenewalTerms, ScenarioKind};
use lease_econ::{entropy_rng, project, resample, seeded_rng};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Estimate the return on buying a leased hotel/restaurant business.
#[derive(Parser, Debug)]
#[command(name = "lease-roi", version)]
struct Cli {
    /// YAML deal file. Defaults to the built-in reference deal.
    #[arg(long)]
    deal: Option<PathBuf>,

    /// Volatility scenario by name or slug (e.g. "worst-case").
    #[arg(long)]
    scenario: Option<ScenarioKind>,

    /// Post-contract renewal terms by name or slug (e.g. "mild-renegotiation").
    #[arg(long)]
    renewal: Option<RenewalTerms>,

    /// Seed for reproducible runs. Without one, sampling uses OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Also resample the projection this many times.
    #[arg(long)]
    runs: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the scenario and renewal catalogs and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Logging setup; stdout is reserved for the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(?cli, "starting CLI");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.list {
        report::write_catalog(&mut out)?;
        return Ok(());
    }

    let mut cfg = match &cli.deal {
        Some(path) => load_deal_config(path)?,
        None => reference_config()?,
    };
    if let Some(kind) = cli.scenario {
        cfg.scenario = kind.scenario();
    }
    if let Some(terms) = cli.renewal {
        cfg.adjustment = terms.adjustment();
    }
    let runs = cli.runs.or(cfg.runs);
    let mut rng = match cli.seed.or(cfg.seed) {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    };

    let result = project(&cfg.deal, &cfg.scenario, &cfg.adjustment, &mut rng)?;
    let summary = runs
        .map(|n| resample(&cfg.deal, &cfg.scenario, &cfg.adjustment, &mut rng, n))
        .transpose()?;
    info!(
        roi = %result.roi().round_dp(2),
        break_even_year = ?result.break_even_year(),
        "projection ready"
    );

    match cli.format {
        OutputFormat::Text => report::write_text(&mut out, &cfg, &result, summary.as_ref())?,
        OutputFormat::Json => {
            let doc = report::JsonReport {
                deal: &cfg.deal,
                scenario: &cfg.scenario,
                adjustment: &cfg.adjustment,
                projection: &result,
                resample: summary.as_ref(),
            };
            serde_json::to_writer_pretty(&mut out, &doc)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
