use lease_core::YearRecord;
use rust_decimal::Decimal;

use crate::engine::RawProjection;
use crate::report::{PaybackPeriod, ProjectionResult};

/// Package raw engine output into the final report: yearly averages and
/// the break-even based payback period.
pub fn summarize(raw: RawProjection) -> ProjectionResult {
    let average_yearly_income = mean(&raw.years, |y| y.income);
    let average_yearly_expenses = mean(&raw.years, |y| y.expenses);
    let payback_period = raw
        .break_even_year
        .map_or(PaybackPeriod::NotReached, PaybackPeriod::Years);

    ProjectionResult {
        total_investment: raw.premium,
        total_income: raw.total_income,
        total_expenses: raw.total_expenses,
        total_profit: raw.total_profit,
        roi: raw.roi,
        payback_period,
        years: raw.years,
        average_yearly_income,
        average_yearly_expenses,
        break_even_year: raw.break_even_year,
    }
}

/// Arithmetic mean of one field over the year sequence; zero when empty.
fn mean(years: &[YearRecord], field: impl Fn(&YearRecord) -> Decimal) -> Decimal {
    if years.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = years.iter().map(field).sum();
    sum / Decimal::from(years.len())
}

/// Payback as `premium / (total_profit / contract years)`.
///
/// Degenerates when total profit is near zero and disagrees with the
/// break-even year whenever cash flows are uneven. Returns `None` when total
/// profit is not positive or there are no years.
#[deprecated(note = "use ProjectionResult::payback_period, which is based on the break-even year")]
pub fn naive_payback_years(result: &ProjectionResult) -> Option<Decimal> {
    let years = result.years().len();
    if years == 0 || result.total_profit() <= Decimal::ZERO {
        return None;
    }
    let per_year = result.total_profit() / Decimal::from(years);
    Some(result.total_investment() / per_year)
}
