use lease_core::YearRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// How long the deal takes to earn back its premium.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PaybackPeriod {
    /// Cumulative profit first turns positive in this contract year.
    Years(u32),
    /// The premium is not recovered within the contract duration.
    NotReached,
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaybackPeriod::Years(1) => f.write_str("1 year"),
            PaybackPeriod::Years(n) => write!(f, "{n} years"),
            PaybackPeriod::NotReached => f.write_str("not reached within contract duration"),
        }
    }
}

/// Final, read-only report of one projection run.
///
/// Built only by the engine; collaborators get accessors and serialization,
/// never mutable fields. Run the engine again to resample.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub(crate) total_investment: Decimal,
    pub(crate) total_income: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) total_profit: Decimal,
    pub(crate) roi: Decimal,
    pub(crate) payback_period: PaybackPeriod,
    pub(crate) years: Vec<YearRecord>,
    pub(crate) average_yearly_income: Decimal,
    pub(crate) average_yearly_expenses: Decimal,
    pub(crate) break_even_year: Option<u32>,
}

impl ProjectionResult {
    /// The premium paid up front.
    pub fn total_investment(&self) -> Decimal {
        self.total_investment
    }

    pub fn total_income(&self) -> Decimal {
        self.total_income
    }

    pub fn total_expenses(&self) -> Decimal {
        self.total_expenses
    }

    /// Income minus expenses over the contract, net of the premium.
    pub fn total_profit(&self) -> Decimal {
        self.total_profit
    }

    /// Return on the premium, in percent.
    pub fn roi(&self) -> Decimal {
        self.roi
    }

    pub fn payback_period(&self) -> PaybackPeriod {
        self.payback_period
    }

    /// Yearly records, ordered by year starting at 1.
    pub fn years(&self) -> &[YearRecord] {
        &self.years
    }

    pub fn average_yearly_income(&self) -> Decimal {
        self.average_yearly_income
    }

    pub fn average_yearly_expenses(&self) -> Decimal {
        self.average_yearly_expenses
    }

    pub fn break_even_year(&self) -> Option<u32> {
        self.break_even_year
    }
}
