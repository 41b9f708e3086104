use lease_core::{
    validate_adjustment, validate_deal, validate_scenario, DealParameters,
    PostContractAdjustment, Scenario, YearRecord,
};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::ProjectionError;
use crate::metrics::summarize;
use crate::report::ProjectionResult;
use crate::sampling::RandomSource;
use crate::step::project_year;

/// Engine output before the metrics summary is derived.
#[derive(Clone, Debug, PartialEq)]
pub struct RawProjection {
    pub premium: Decimal,
    pub years: Vec<YearRecord>,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    /// `total_income - total_expenses - premium`.
    pub total_profit: Decimal,
    /// `total_profit / premium * 100`.
    pub roi: Decimal,
    /// First year whose cumulative profit is strictly positive.
    pub break_even_year: Option<u32>,
}

/// Project a deal over its full contract duration.
///
/// All inputs are validated before the first year is simulated. Each call
/// consumes two samples per year from `rng`; passing a generator with the
/// same seed reproduces the same result.
///
/// Example:
/// let deal = DealParameters { premium: Decimal::new(1000, 0), contract_duration: 3, ..Default::default() };
/// let fixed = ScenarioKind::FixedCase.scenario();
/// let r = project(&deal, &fixed, &RenewalTerms::SameTerms.adjustment(), &mut seeded_rng(42)).unwrap();
/// assert_eq!(r.roi(), Decimal::new(-100, 0));
pub fn project<S: RandomSource + ?Sized>(
    deal: &DealParameters,
    scenario: &Scenario,
    adjustment: &PostContractAdjustment,
    rng: &mut S,
) -> Result<ProjectionResult, ProjectionError> {
    validate_inputs(deal, scenario, adjustment)?;
    Ok(summarize(run_years(deal, scenario, adjustment, rng)))
}

pub(crate) fn validate_inputs(
    deal: &DealParameters,
    scenario: &Scenario,
    adjustment: &PostContractAdjustment,
) -> Result<(), ProjectionError> {
    validate_deal(deal)?;
    validate_scenario(scenario)?;
    validate_adjustment(adjustment)?;
    Ok(())
}

/// Simulation loop over already-validated inputs.
pub(crate) fn run_years<S: RandomSource + ?Sized>(
    deal: &DealParameters,
    scenario: &Scenario,
    adjustment: &PostContractAdjustment,
    rng: &mut S,
) -> RawProjection {
    let mut years = Vec::with_capacity(deal.contract_duration as usize);
    let mut cumulative_profit = -deal.premium;
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut break_even_year = None;

    for year in 1..=deal.contract_duration {
        let record = project_year(year, deal, scenario, adjustment, cumulative_profit, rng);
        cumulative_profit = record.cumulative_profit;
        total_income += record.income;
        total_expenses += record.expenses;
        if break_even_year.is_none() && cumulative_profit > Decimal::ZERO {
            break_even_year = Some(year);
        }
        years.push(record);
    }

    let total_profit = total_income - total_expenses - deal.premium;
    let roi = total_profit / deal.premium * Decimal::ONE_HUNDRED;
    debug!(
        scenario = %scenario.name,
        adjustment = %adjustment.name,
        years = years.len(),
        %total_profit,
        %roi,
        ?break_even_year,
        "projection complete"
    );

    RawProjection {
        premium: deal.premium,
        years,
        total_income,
        total_expenses,
        total_profit,
        roi,
        break_even_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::PaybackPeriod;
    use crate::sampling::seeded_rng;
    use lease_core::{
        MonthlyCosts, MonthlyIncome, RenewalTerms, ScenarioKind, ValidationError,
        VariationBand, MAX_CONTRACT_YEARS, MAX_FACTOR, MAX_MONEY, MIN_PREMIUM,
    };
    use proptest::prelude::*;

    fn deal() -> DealParameters {
        DealParameters {
            premium: Decimal::new(10_000_000, 0),
            monthly_rental: Decimal::new(30_000, 0),
            costs: MonthlyCosts {
                electricity: Decimal::new(12_000, 0),
                salary: Decimal::new(65_000, 0),
                water: Decimal::new(2_000, 0),
                other: Decimal::new(5_000, 0),
            },
            income: MonthlyIncome {
                room_rental: Decimal::new(270_000, 0),
                secondary_rental: Decimal::new(30_000, 0),
            },
            contract_duration: 9,
            time_left: 7,
        }
    }

    fn fixed_run(d: &DealParameters) -> ProjectionResult {
        project(
            d,
            &ScenarioKind::FixedCase.scenario(),
            &RenewalTerms::SameTerms.adjustment(),
            &mut seeded_rng(0),
        )
        .unwrap()
    }

    #[test]
    fn reference_deal_without_variance() {
        let r = fixed_run(&deal());
        assert_eq!(r.years().len(), 9);
        let y1 = &r.years()[0];
        assert_eq!(y1.expenses, Decimal::new(1_368_000, 0));
        assert_eq!(y1.income, Decimal::new(3_600_000, 0));
        assert_eq!(y1.cumulative_profit, Decimal::new(-7_768_000, 0));
        // rent 33,000 in years 3-5 -> expenses (33,000 + 84,000) x 12
        assert_eq!(r.years()[2].expenses, Decimal::new(1_404_000, 0));
        assert_eq!(r.years()[4].expenses, Decimal::new(1_404_000, 0));
        // rent 36,300 in years 6-9
        assert_eq!(r.years()[5].expenses, Decimal::new(1_443_600, 0));
        assert_eq!(r.years()[8].expenses, Decimal::new(1_443_600, 0));
        // cumulative: -7,768,000, -5,536,000, -3,340,000, -1,144,000, 1,052,000
        assert_eq!(r.break_even_year(), Some(5));
        assert_eq!(r.payback_period(), PaybackPeriod::Years(5));
    }

    #[test]
    fn rent_jumps_only_at_year_three_and_six() {
        let r = fixed_run(&deal());
        let jumps: Vec<u32> = r
            .years()
            .windows(2)
            .filter(|w| w[1].expenses != w[0].expenses)
            .map(|w| w[1].year)
            .collect();
        assert_eq!(jumps, vec![3, 6]);
    }

    #[test]
    fn totals_identity_holds_exactly() {
        let r = project(
            &deal(),
            &ScenarioKind::WorstCase.scenario(),
            &RenewalTerms::MildRenegotiation.adjustment(),
            &mut seeded_rng(11),
        )
        .unwrap();
        assert_eq!(
            r.total_profit(),
            r.total_income() - r.total_expenses() - r.total_investment()
        );
        let profits: Decimal = r.years().iter().map(|y| y.profit).sum();
        assert_eq!(r.total_profit(), profits - r.total_investment());
    }

    #[test]
    fn zero_premium_is_invalid() {
        let mut d = deal();
        d.premium = Decimal::ZERO;
        let err = project(
            &d,
            &ScenarioKind::NormalCase.scenario(),
            &RenewalTerms::SameTerms.adjustment(),
            &mut seeded_rng(0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ProjectionError::InvalidParameter(ValidationError::NonPositivePremium)
        );
    }

    #[test]
    fn time_left_beyond_contract_is_invalid() {
        let mut d = deal();
        d.time_left = 12;
        let err = project(
            &d,
            &ScenarioKind::NormalCase.scenario(),
            &RenewalTerms::SameTerms.adjustment(),
            &mut seeded_rng(0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::InvalidParameter(ValidationError::TimeLeftExceedsContract { .. })
        ));
    }

    #[test]
    fn sub_satang_premium_is_invalid() {
        let mut d = deal();
        d.premium = Decimal::new(1, 28);
        let err = project(
            &d,
            &ScenarioKind::FixedCase.scenario(),
            &RenewalTerms::SameTerms.adjustment(),
            &mut seeded_rng(0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ProjectionError::InvalidParameter(ValidationError::OutOfRange("premium"))
        );
    }

    #[test]
    fn income_beyond_money_ceiling_is_invalid() {
        let mut d = deal();
        d.income.room_rental = Decimal::new(7, 0) * MAX_MONEY * MAX_MONEY;
        let err = project(
            &d,
            &ScenarioKind::FixedCase.scenario(),
            &RenewalTerms::SameTerms.adjustment(),
            &mut seeded_rng(0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ProjectionError::InvalidParameter(ValidationError::OutOfRange("room rental income"))
        );
    }

    #[test]
    fn extreme_accepted_inputs_complete() {
        // largest money, widest bands, largest factor, tiniest premium
        let mut d = deal();
        d.premium = MIN_PREMIUM;
        d.monthly_rental = MAX_MONEY;
        d.costs = MonthlyCosts {
            electricity: MAX_MONEY,
            salary: MAX_MONEY,
            water: MAX_MONEY,
            other: MAX_MONEY,
        };
        d.income = MonthlyIncome {
            room_rental: MAX_MONEY,
            secondary_rental: MAX_MONEY,
        };
        d.contract_duration = MAX_CONTRACT_YEARS;
        d.time_left = 0;
        let wide = Scenario::custom(
            "Wide",
            VariationBand::new(-Decimal::ONE, Decimal::ONE),
            VariationBand::new(-Decimal::ONE, Decimal::ONE),
        );
        let steep = PostContractAdjustment {
            name: "Steep".to_string(),
            factor: MAX_FACTOR,
        };
        let r = project(&d, &wide, &steep, &mut seeded_rng(5)).unwrap();
        assert_eq!(r.years().len(), MAX_CONTRACT_YEARS as usize);
        assert_eq!(
            r.total_profit(),
            r.total_income() - r.total_expenses() - r.total_investment()
        );
    }

    #[test]
    fn contract_beyond_a_century_is_invalid() {
        let mut d = deal();
        d.contract_duration = 4_000_000_000;
        let err = project(
            &d,
            &ScenarioKind::NormalCase.scenario(),
            &RenewalTerms::SameTerms.adjustment(),
            &mut seeded_rng(0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ProjectionError::InvalidParameter(ValidationError::ContractTooLong {
                contract_duration: 4_000_000_000,
                max: MAX_CONTRACT_YEARS,
            })
        );
    }

    #[test]
    fn zero_duration_returns_empty_projection() {
        let mut d = deal();
        d.contract_duration = 0;
        d.time_left = 0;
        let r = fixed_run(&d);
        assert!(r.years().is_empty());
        assert_eq!(r.total_profit(), Decimal::new(-10_000_000, 0));
        assert_eq!(r.roi(), Decimal::new(-100, 0));
        assert_eq!(r.break_even_year(), None);
        assert_eq!(r.payback_period(), PaybackPeriod::NotReached);
        assert_eq!(r.average_yearly_income(), Decimal::ZERO);
    }

    #[test]
    fn fixed_case_is_deterministic_across_seeds() {
        let a = project(
            &deal(),
            &ScenarioKind::FixedCase.scenario(),
            &RenewalTerms::SameTerms.adjustment(),
            &mut seeded_rng(1),
        )
        .unwrap();
        let b = project(
            &deal(),
            &ScenarioKind::FixedCase.scenario(),
            &RenewalTerms::SameTerms.adjustment(),
            &mut seeded_rng(2),
        )
        .unwrap();
        assert_eq!(a.years(), b.years());
    }

    #[test]
    fn same_seed_replays_noisy_projection() {
        let run = |seed| {
            project(
                &deal(),
                &ScenarioKind::NormalCase.scenario(),
                &RenewalTerms::SameTerms.adjustment(),
                &mut seeded_rng(seed),
            )
            .unwrap()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42).years(), run(43).years());
    }

    proptest! {
        #[test]
        fn year_sequence_and_cumulative_invariants(
            seed in any::<u64>(),
            duration in 0u32..30,
            premium in 1i64..50_000_000,
            room in 0i64..500_000,
            kind in 0usize..4,
        ) {
            let mut d = deal();
            d.contract_duration = duration;
            d.time_left = duration / 2;
            d.premium = Decimal::new(premium, 0);
            d.income.room_rental = Decimal::new(room, 0);
            let r = project(
                &d,
                &ScenarioKind::ALL[kind].scenario(),
                &RenewalTerms::HardRenegotiation.adjustment(),
                &mut seeded_rng(seed),
            ).unwrap();

            prop_assert_eq!(r.years().len(), duration as usize);
            let mut running = -d.premium;
            for (i, y) in r.years().iter().enumerate() {
                prop_assert_eq!(y.year, i as u32 + 1);
                prop_assert_eq!(y.profit, y.income - y.expenses);
                running += y.profit;
                prop_assert_eq!(y.cumulative_profit, running);
            }
            prop_assert_eq!(
                r.total_profit(),
                r.total_income() - r.total_expenses() - d.premium
            );

            let first_positive = r
                .years()
                .iter()
                .find(|y| y.cumulative_profit > Decimal::ZERO)
                .map(|y| y.year);
            prop_assert_eq!(r.break_even_year(), first_positive);
        }
    }
}
