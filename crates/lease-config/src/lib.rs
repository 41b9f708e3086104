#![deny(warnings)]

//! YAML deal files: deal terms plus scenario, renewal and sampling choices.

use lease_core::{
    validate_adjustment, validate_deal, validate_runs, validate_scenario, DealParameters,
    PostContractAdjustment, RenewalTerms, Scenario, ScenarioKind, ValidationError,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const REFERENCE_DEAL: &str = include_str!("../../../assets/deals/reference.yaml");

/// On-disk layout of a deal file. Keys are camelCase, matching the JSON report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DealFile {
    deal: DealParameters,
    /// Catalog scenario name or slug, e.g. "worst-case".
    #[serde(default)]
    scenario: Option<String>,
    /// Explicit bands; takes precedence over `scenario`.
    #[serde(default)]
    custom_scenario: Option<Scenario>,
    /// Catalog renewal name or slug, e.g. "mild-renegotiation".
    #[serde(default)]
    renewal: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    runs: Option<u32>,
}

/// A validated deal file with catalog names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct DealConfig {
    pub deal: DealParameters,
    pub scenario: Scenario,
    pub adjustment: PostContractAdjustment,
    /// Seed for reproducible sampling; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Number of resampling runs, if requested.
    pub runs: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid deal file: {0}")]
    Parse(String),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Parse and validate a deal file from YAML text.
///
/// Missing `scenario`/`renewal` fall back to the catalog defaults
/// (Normal Case, Same Terms).
pub fn parse_deal_config(text: &str) -> Result<DealConfig, ConfigError> {
    let file: DealFile = serde_yaml::from_str(text)?;
    let scenario = match (file.custom_scenario, file.scenario) {
        (Some(custom), _) => custom,
        (None, Some(name)) => ScenarioKind::from_name(&name)?.scenario(),
        (None, None) => ScenarioKind::default().scenario(),
    };
    let adjustment = match file.renewal {
        Some(name) => RenewalTerms::from_name(&name)?.adjustment(),
        None => RenewalTerms::default().adjustment(),
    };
    validate_deal(&file.deal)?;
    validate_scenario(&scenario)?;
    validate_adjustment(&adjustment)?;
    if let Some(runs) = file.runs {
        validate_runs(runs)?;
    }
    Ok(DealConfig {
        deal: file.deal,
        scenario,
        adjustment,
        seed: file.seed,
        runs: file.runs,
    })
}

/// Read, parse and validate a deal file.
pub fn load_deal_config<P: AsRef<Path>>(path: P) -> Result<DealConfig, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let cfg = parse_deal_config(&text)?;
    info!(
        path = %path.display(),
        scenario = %cfg.scenario.name,
        adjustment = %cfg.adjustment.name,
        "loaded deal file"
    );
    Ok(cfg)
}

/// The built-in reference deal (a nine-year hotel lease, seven years left).
pub fn reference_config() -> Result<DealConfig, ConfigError> {
    parse_deal_config(REFERENCE_DEAL)
}
