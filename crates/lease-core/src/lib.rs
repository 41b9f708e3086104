#![deny(warnings)]

//! Core domain models and invariants for leasehold ROI projections.
//!
//! This crate defines the serializable inputs of a projection (deal terms,
//! volatility scenarios, post-contract adjustments), the per-year record the
//! engine emits, and validation helpers guarding the basic invariants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest accepted premium (one satang).
pub const MIN_PREMIUM: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
/// Ceiling on any single monetary input: one trillion currency units.
///
/// Together with the band, factor and duration ceilings this keeps every
/// intermediate total, ROI and resampled ROI sum far inside `Decimal` range.
pub const MAX_MONEY: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);
/// Longest accepted contract, in years.
pub const MAX_CONTRACT_YEARS: u32 = 100;
/// Bands are offsets from 1.0 and must stay within `[-1, 1]`.
pub const MAX_BAND_OFFSET: Decimal = Decimal::ONE;
/// Largest accepted post-contract factor.
pub const MAX_FACTOR: Decimal = Decimal::TEN;
/// Most resampling runs accepted in one call.
pub const MAX_RUNS: u32 = 1_000_000;

/// Fixed monthly cost lines of the business, in currency units.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCosts {
    /// Electricity bill.
    pub electricity: Decimal,
    /// Staff salaries.
    pub salary: Decimal,
    /// Water bill.
    pub water: Decimal,
    /// Everything else.
    pub other: Decimal,
}

impl MonthlyCosts {
    /// Sum of all fixed cost lines (rent excluded).
    pub fn total(&self) -> Decimal {
        self.electricity + self.salary + self.water + self.other
    }
}

/// Monthly income lines, in currency units.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyIncome {
    /// Primary income from room rentals. Subject to scenario variation.
    pub room_rental: Decimal,
    /// Secondary rental income (e.g. a leased-out restaurant). Not perturbed.
    pub secondary_rental: Decimal,
}

/// Static terms of the deal under evaluation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealParameters {
    /// One-time acquisition cost of the leasehold, in `[MIN_PREMIUM, MAX_MONEY]`.
    pub premium: Decimal,
    /// Base monthly rent owed to the landlord, before escalation.
    pub monthly_rental: Decimal,
    /// Fixed monthly cost lines.
    pub costs: MonthlyCosts,
    /// Monthly income lines.
    pub income: MonthlyIncome,
    /// Contract length in whole years, at most `MAX_CONTRACT_YEARS`.
    pub contract_duration: u32,
    /// Years left under the current lease before renewal (<= contract_duration).
    pub time_left: u32,
}

/// A perturbation range `[min, max)` expressed as fractional offsets from 1.0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariationBand {
    pub min: Decimal,
    pub max: Decimal,
}

impl VariationBand {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Band with no variance: every sample lands on 1.0.
    pub fn flat() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO)
    }

    pub fn width(&self) -> Decimal {
        self.max - self.min
    }
}

/// A named volatility profile applied to income and expenses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub income: VariationBand,
    pub expenses: VariationBand,
}

impl Scenario {
    /// Build a custom scenario outside the catalog. Validate before use.
    pub fn custom(name: impl Into<String>, income: VariationBand, expenses: VariationBand) -> Self {
        Self {
            name: name.into(),
            income,
            expenses,
        }
    }

    /// Human-readable summary of the two bands.
    ///
    /// Example:
    /// let s = ScenarioKind::WorstCase.scenario();
    /// assert_eq!(s.disclaimer(), "Income varies between -10% and +5%, Expenses vary between -5% and +15%.");
    pub fn disclaimer(&self) -> String {
        format!(
            "Income varies between {} and {}, Expenses vary between {} and {}.",
            signed_pct(self.income.min),
            signed_pct(self.income.max),
            signed_pct(self.expenses.min),
            signed_pct(self.expenses.max),
        )
    }
}

fn signed_pct(frac: Decimal) -> String {
    let pct = (frac * Decimal::ONE_HUNDRED).normalize();
    if pct > Decimal::ZERO {
        format!("+{pct}%")
    } else {
        format!("{pct}%")
    }
}

/// Multiplicative factor applied to income and expenses once the current
/// lease has run out and the business operates under renewed terms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostContractAdjustment {
    pub name: String,
    /// Factor applied to both yearly income and yearly expenses (> 0).
    pub factor: Decimal,
}

/// Catalog of built-in volatility scenarios.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    WorstCase,
    #[default]
    NormalCase,
    BestCase,
    /// Zero variance; the projection becomes deterministic.
    FixedCase,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::WorstCase,
        ScenarioKind::NormalCase,
        ScenarioKind::BestCase,
        ScenarioKind::FixedCase,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::WorstCase => "Worst Case",
            ScenarioKind::NormalCase => "Normal Case",
            ScenarioKind::BestCase => "Best Case",
            ScenarioKind::FixedCase => "Fixed Case",
        }
    }

    /// Short identifier for command lines and config files, e.g. "worst-case".
    pub fn slug(self) -> &'static str {
        match self {
            ScenarioKind::WorstCase => "worst-case",
            ScenarioKind::NormalCase => "normal-case",
            ScenarioKind::BestCase => "best-case",
            ScenarioKind::FixedCase => "fixed-case",
        }
    }

    pub fn scenario(self) -> Scenario {
        let (income, expenses) = match self {
            ScenarioKind::WorstCase => (band(-10, 5), band(-5, 15)),
            ScenarioKind::NormalCase => (band(-5, 10), band(-10, 10)),
            ScenarioKind::BestCase => (band(0, 15), band(-20, 5)),
            ScenarioKind::FixedCase => (VariationBand::flat(), VariationBand::flat()),
        };
        Scenario::custom(self.name(), income, expenses)
    }

    /// Look up a catalog entry by display name or slug, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted) || k.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownScenario(wanted.to_string()))
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Band from whole-percent bounds.
fn band(min_pct: i64, max_pct: i64) -> VariationBand {
    VariationBand::new(Decimal::new(min_pct, 2), Decimal::new(max_pct, 2))
}

/// Catalog of post-contract renewal outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenewalTerms {
    #[default]
    SameTerms,
    MildRenegotiation,
    HardRenegotiation,
}

impl RenewalTerms {
    pub const ALL: [RenewalTerms; 3] = [
        RenewalTerms::SameTerms,
        RenewalTerms::MildRenegotiation,
        RenewalTerms::HardRenegotiation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RenewalTerms::SameTerms => "Same Terms",
            RenewalTerms::MildRenegotiation => "Mild Renegotiation",
            RenewalTerms::HardRenegotiation => "Hard Renegotiation",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            RenewalTerms::SameTerms => "same-terms",
            RenewalTerms::MildRenegotiation => "mild-renegotiation",
            RenewalTerms::HardRenegotiation => "hard-renegotiation",
        }
    }

    pub fn factor(self) -> Decimal {
        match self {
            RenewalTerms::SameTerms => Decimal::ONE,
            RenewalTerms::MildRenegotiation => Decimal::new(95, 2),
            RenewalTerms::HardRenegotiation => Decimal::new(85, 2),
        }
    }

    pub fn adjustment(self) -> PostContractAdjustment {
        PostContractAdjustment {
            name: self.name().to_string(),
            factor: self.factor(),
        }
    }

    /// Look up a catalog entry by display name or slug, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted) || k.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownAdjustment(wanted.to_string()))
    }
}

impl fmt::Display for RenewalTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenewalTerms {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Cash flow of one simulated contract year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    /// 1-based year index.
    pub year: u32,
    pub income: Decimal,
    pub expenses: Decimal,
    /// `income - expenses`.
    pub profit: Decimal,
    /// Running profit net of the premium, after this year.
    pub cumulative_profit: Decimal,
}

/// Validation errors for domain invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The premium is the ROI denominator and must be strictly positive.
    #[error("premium must be > 0")]
    NonPositivePremium,
    /// Monetary inputs must be non-negative.
    #[error("{0} must not be negative")]
    NegativeMoney(&'static str),
    /// The remaining lease cannot outlast the contract.
    #[error("time left ({time_left}y) exceeds contract duration ({contract_duration}y)")]
    TimeLeftExceedsContract { time_left: u32, contract_duration: u32 },
    /// A perturbation band has min > max.
    #[error("{0} band has min > max")]
    InvertedBand(&'static str),
    /// Post-contract factor must be strictly positive.
    #[error("post-contract factor must be > 0, got {0}")]
    NonPositiveFactor(Decimal),
    /// Scenario or adjustment names must not be blank.
    #[error("name must not be empty")]
    EmptyName,
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
    #[error("unknown post-contract adjustment: {0}")]
    UnknownAdjustment(String),
    /// A value lies outside the range the engine supports.
    #[error("{0} is outside the supported range")]
    OutOfRange(&'static str),
    #[error("contract duration ({contract_duration}y) exceeds {max}y")]
    ContractTooLong { contract_duration: u32, max: u32 },
    /// Resampling needs at least one run.
    #[error("number of runs must be > 0")]
    ZeroRuns,
    #[error("number of runs ({runs}) exceeds {max}")]
    TooManyRuns { runs: u32, max: u32 },
}

/// Validate deal terms.
pub fn validate_deal(deal: &DealParameters) -> Result<(), ValidationError> {
    if deal.premium <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePremium);
    }
    let money = [
        ("premium", deal.premium),
        ("monthly rental", deal.monthly_rental),
        ("electricity cost", deal.costs.electricity),
        ("salary cost", deal.costs.salary),
        ("water cost", deal.costs.water),
        ("other cost", deal.costs.other),
        ("room rental income", deal.income.room_rental),
        ("secondary rental income", deal.income.secondary_rental),
    ];
    for (field, value) in money {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeMoney(field));
        }
        if value > MAX_MONEY {
            return Err(ValidationError::OutOfRange(field));
        }
    }
    if deal.premium < MIN_PREMIUM {
        return Err(ValidationError::OutOfRange("premium"));
    }
    if deal.contract_duration > MAX_CONTRACT_YEARS {
        return Err(ValidationError::ContractTooLong {
            contract_duration: deal.contract_duration,
            max: MAX_CONTRACT_YEARS,
        });
    }
    if deal.time_left > deal.contract_duration {
        return Err(ValidationError::TimeLeftExceedsContract {
            time_left: deal.time_left,
            contract_duration: deal.contract_duration,
        });
    }
    Ok(())
}

/// Validate a scenario's bands and name.
pub fn validate_scenario(s: &Scenario) -> Result<(), ValidationError> {
    if s.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if s.income.min > s.income.max {
        return Err(ValidationError::InvertedBand("income"));
    }
    if s.expenses.min > s.expenses.max {
        return Err(ValidationError::InvertedBand("expense"));
    }
    let bands = [("income band", s.income), ("expense band", s.expenses)];
    for (field, band) in bands {
        if band.min < -MAX_BAND_OFFSET || band.max > MAX_BAND_OFFSET {
            return Err(ValidationError::OutOfRange(field));
        }
    }
    Ok(())
}

/// Validate a post-contract adjustment.
pub fn validate_adjustment(a: &PostContractAdjustment) -> Result<(), ValidationError> {
    if a.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if a.factor <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveFactor(a.factor));
    }
    if a.factor > MAX_FACTOR {
        return Err(ValidationError::OutOfRange("post-contract factor"));
    }
    Ok(())
}

/// Validate a resampling run count.
pub fn validate_runs(runs: u32) -> Result<(), ValidationError> {
    if runs == 0 {
        return Err(ValidationError::ZeroRuns);
    }
    if runs > MAX_RUNS {
        return Err(ValidationError::TooManyRuns {
            runs,
            max: MAX_RUNS,
        });
    }
    Ok(())
}
