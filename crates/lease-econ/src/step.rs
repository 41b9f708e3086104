use lease_core::{DealParameters, PostContractAdjustment, Scenario, YearRecord};
use rust_decimal::Decimal;
use tracing::debug;

use crate::rent::escalated_rent;
use crate::sampling::{variation_factor, RandomSource};

const MONTHS_PER_YEAR: i64 = 12;

/// Project a single contract year.
///
/// Draws the income factor first, then the expense factor. Years past
/// `deal.time_left` run under the post-contract factor, which scales both
/// yearly totals. The returned record carries the updated cumulative profit.
pub fn project_year<S: RandomSource + ?Sized>(
    year: u32,
    deal: &DealParameters,
    scenario: &Scenario,
    adjustment: &PostContractAdjustment,
    cumulative_profit: Decimal,
    rng: &mut S,
) -> YearRecord {
    let months = Decimal::from(MONTHS_PER_YEAR);
    let rent = escalated_rent(year, deal.monthly_rental);
    let income_factor = variation_factor(&scenario.income, rng);
    let expense_factor = variation_factor(&scenario.expenses, rng);
    let regime = if year > deal.time_left {
        adjustment.factor
    } else {
        Decimal::ONE
    };

    let monthly_income = deal.income.room_rental * income_factor + deal.income.secondary_rental;
    let income = monthly_income * months * regime;
    let expenses = (rent + deal.costs.total()) * months * expense_factor * regime;
    let profit = income - expenses;
    let cumulative_profit = cumulative_profit + profit;

    debug!(
        year,
        %rent,
        %income_factor,
        %expense_factor,
        post_contract = year > deal.time_left,
        %profit,
        %cumulative_profit,
        "projected year"
    );

    YearRecord {
        year,
        income,
        expenses,
        profit,
        cumulative_profit,
    }
}
