//! Text and JSON rendering of projection results.

use comfy_table::{Cell, CellAlignment, Table};
use lease_config::DealConfig;
use lease_core::{DealParameters, PostContractAdjustment, RenewalTerms, Scenario, ScenarioKind};
use lease_econ::{ProjectionResult, ResampleSummary};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::io::{self, Write};

const CURRENCY: &str = "฿";

/// Everything `--format json` prints.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub deal: &'a DealParameters,
    pub scenario: &'a Scenario,
    pub adjustment: &'a PostContractAdjustment,
    pub projection: &'a ProjectionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resample: Option<&'a ResampleSummary>,
}

/// Integer-rounded, comma-grouped amount with a single currency prefix.
///
/// Example: `-1234.5` -> `-฿1,235`
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let grouped = group_thousands(&rounded.abs().trunc().to_string());
    if rounded < Decimal::ZERO {
        format!("-{CURRENCY}{grouped}")
    } else {
        format!("{CURRENCY}{grouped}")
    }
}

/// Percentage with two decimals, e.g. `96.78%`.
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}%")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn money_cell(value: Decimal) -> Cell {
    Cell::new(format_currency(value)).set_alignment(CellAlignment::Right)
}

/// Headline metrics, scenario disclaimer and the per-year table.
pub fn write_text<W: Write>(
    out: &mut W,
    cfg: &DealConfig,
    result: &ProjectionResult,
    resample: Option<&ResampleSummary>,
) -> io::Result<()> {
    writeln!(
        out,
        "Scenario: {} | Renewal: {} (x{})",
        cfg.scenario.name, cfg.adjustment.name, cfg.adjustment.factor
    )?;
    writeln!(out, "{}", cfg.scenario.disclaimer())?;
    writeln!(out)?;
    writeln!(out, "Total Investment: {}", format_currency(result.total_investment()))?;
    writeln!(out, "ROI: {}", format_percent(result.roi()))?;
    writeln!(out, "Payback Period: {}", result.payback_period())?;
    writeln!(out, "Total Profit: {}", format_currency(result.total_profit()))?;
    writeln!(
        out,
        "Average Yearly Income: {} | Average Yearly Expenses: {}",
        format_currency(result.average_yearly_income()),
        format_currency(result.average_yearly_expenses())
    )?;
    writeln!(out)?;

    let mut table = Table::new();
    table.set_header(vec!["Year", "Income", "Expenses", "Profit", "Cumulative"]);
    for y in result.years() {
        let marker = if result.break_even_year() == Some(y.year) {
            format!("{} *", y.year)
        } else {
            y.year.to_string()
        };
        table.add_row(vec![
            Cell::new(marker),
            money_cell(y.income),
            money_cell(y.expenses),
            money_cell(y.profit),
            money_cell(y.cumulative_profit),
        ]);
    }
    writeln!(out, "{table}")?;
    if let Some(year) = result.break_even_year() {
        writeln!(out, "* break-even in year {year}")?;
    }

    if let Some(s) = resample {
        writeln!(out)?;
        writeln!(out, "Resampled {} runs:", s.runs)?;
        writeln!(
            out,
            "ROI mean {} | median {} | 5th pct {} | best {}",
            format_percent(s.mean_roi),
            format_percent(s.median_roi),
            format_percent(s.p5_roi),
            format_percent(s.best_roi)
        )?;
        writeln!(
            out,
            "Mean total profit: {} | Break-even within contract: {}",
            format_currency(s.mean_total_profit),
            format_percent(s.break_even_share * Decimal::ONE_HUNDRED)
        )?;
    }
    Ok(())
}

/// The scenario and renewal catalogs, one entry per line.
pub fn write_catalog<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Scenarios:")?;
    for kind in ScenarioKind::ALL {
        writeln!(
            out,
            "  {:<12} {:<12} {}",
            kind.slug(),
            kind.name(),
            kind.scenario().disclaimer()
        )?;
    }
    writeln!(out, "Renewal terms:")?;
    for terms in RenewalTerms::ALL {
        writeln!(
            out,
            "  {:<19} {:<19} x{}",
            terms.slug(),
            terms.name(),
            terms.factor()
        )?;
    }
    Ok(())
}
