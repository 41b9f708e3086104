use lease_core::{validate_runs, DealParameters, PostContractAdjustment, Scenario};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::engine::{run_years, validate_inputs};
use crate::error::ProjectionError;
use crate::sampling::RandomSource;

/// Distribution of outcomes over repeated projections of the same deal.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResampleSummary {
    pub runs: u32,
    pub mean_roi: Decimal,
    pub median_roi: Decimal,
    /// 5th-percentile ROI (a downside estimate).
    pub p5_roi: Decimal,
    pub best_roi: Decimal,
    pub mean_total_profit: Decimal,
    /// Fraction of runs, in [0, 1], that break even within the contract.
    pub break_even_share: Decimal,
}

/// Run the projection `runs` times from one random stream and aggregate.
///
/// Inputs are validated once up front; `runs` must lie in `1..=MAX_RUNS`.
pub fn resample<S: RandomSource + ?Sized>(
    deal: &DealParameters,
    scenario: &Scenario,
    adjustment: &PostContractAdjustment,
    rng: &mut S,
    runs: u32,
) -> Result<ResampleSummary, ProjectionError> {
    validate_runs(runs)?;
    validate_inputs(deal, scenario, adjustment)?;

    let mut rois = Vec::with_capacity(runs as usize);
    let mut profit_sum = Decimal::ZERO;
    let mut breaking_even = 0u32;
    for _ in 0..runs {
        let raw = run_years(deal, scenario, adjustment, rng);
        rois.push(raw.roi);
        profit_sum += raw.total_profit;
        if raw.break_even_year.is_some() {
            breaking_even += 1;
        }
    }
    rois.sort();

    let count = Decimal::from(runs);
    let roi_sum: Decimal = rois.iter().sum();
    let summary = ResampleSummary {
        runs,
        mean_roi: roi_sum / count,
        median_roi: rois[rois.len() / 2],
        p5_roi: rois[rois.len() * 5 / 100],
        best_roi: rois[rois.len() - 1],
        mean_total_profit: profit_sum / count,
        break_even_share: Decimal::from(breaking_even) / count,
    };
    info!(
        scenario = %scenario.name,
        runs,
        mean_roi = %summary.mean_roi.round_dp(2),
        p5_roi = %summary.p5_roi.round_dp(2),
        break_even_share = %summary.break_even_share.round_dp(3),
        "resampling complete"
    );
    Ok(summary)
}
